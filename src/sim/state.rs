//! Game state and core simulation types

use glam::Vec2;

use crate::consts::*;

/// Axis-aligned rectangle with integer coordinates, mirroring SDL's rect.
/// Paddles and the ball's bounding box are all `Rect`s mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Complete game state: two paddles, the ball and its velocity.
///
/// Created once at startup and mutated in place every frame. Paddle x
/// never changes after creation; paddle y stays in
/// `[0, SCREEN_HEIGHT - PADDLE_HEIGHT]`.
#[derive(Debug, Clone)]
pub struct GameState {
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Rect,
    /// Ball velocity in pixels per frame. Component magnitudes are pinned
    /// to `BALL_SPEED_X`/`BALL_SPEED_Y`; only the signs flip.
    pub ball_vel: Vec2,
}

impl GameState {
    /// Paddles vertically centered at their screen edges, ball centered
    /// and heading down-right.
    pub fn new() -> Self {
        Self {
            left_paddle: Rect::new(
                PADDLE_OFFSET,
                (SCREEN_HEIGHT - PADDLE_HEIGHT) / 2,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            right_paddle: Rect::new(
                SCREEN_WIDTH - PADDLE_OFFSET - PADDLE_WIDTH,
                (SCREEN_HEIGHT - PADDLE_HEIGHT) / 2,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            ball: Rect::new(
                (SCREEN_WIDTH - BALL_SIZE) / 2,
                (SCREEN_HEIGHT - BALL_SIZE) / 2,
                BALL_SIZE,
                BALL_SIZE,
            ),
            ball_vel: Vec2::new(BALL_SPEED_X, BALL_SPEED_Y),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new();

        assert_eq!(state.left_paddle, Rect::new(50, 190, 10, 100));
        assert_eq!(state.right_paddle, Rect::new(580, 190, 10, 100));
        assert_eq!(state.ball, Rect::new(315, 235, 10, 10));
        assert_eq!(state.ball_vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_paddles_mirror_each_other() {
        let state = GameState::new();

        let left_gap = state.left_paddle.x;
        let right_gap = SCREEN_WIDTH - (state.right_paddle.x + state.right_paddle.w);
        assert_eq!(left_gap, right_gap);
        assert_eq!(state.left_paddle.y, state.right_paddle.y);
    }
}
