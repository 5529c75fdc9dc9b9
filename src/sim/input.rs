//! Keyboard input applied to the paddles

use crate::consts::*;

use super::state::Rect;

/// Which of the four movement keys are held this frame.
///
/// Produced fresh each frame by the display backend; never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up_left: bool,
    pub down_left: bool,
    pub up_right: bool,
    pub down_right: bool,
}

/// Move both paddles according to the held keys.
///
/// Each key applies its full step independently, so opposite keys held
/// together cancel out. The y coordinate is clamped back into the play
/// field after every individual step, not once at the end.
pub fn apply_input(keys: &HeldKeys, left_paddle: &mut Rect, right_paddle: &mut Rect) {
    if keys.up_left {
        left_paddle.y = (left_paddle.y - PADDLE_SPEED).max(0);
    }
    if keys.down_left {
        left_paddle.y = (left_paddle.y + PADDLE_SPEED).min(SCREEN_HEIGHT - PADDLE_HEIGHT);
    }

    if keys.up_right {
        right_paddle.y = (right_paddle.y - PADDLE_SPEED).max(0);
    }
    if keys.down_right {
        right_paddle.y = (right_paddle.y + PADDLE_SPEED).min(SCREEN_HEIGHT - PADDLE_HEIGHT);
    }
}
