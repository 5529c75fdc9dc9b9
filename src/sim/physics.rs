//! Ball integration and collision response

use glam::Vec2;

use crate::consts::*;

use super::state::Rect;

/// Advance the ball one frame and resolve collisions against the walls
/// and both paddles.
///
/// Order matters: integrate, wall bounce, left paddle, right paddle,
/// out-of-bounds reset. A wall bounce flips the velocity without
/// correcting the position, so the ball can overshoot the wall for a
/// frame before the flipped velocity carries it back.
pub fn advance_ball(ball: &mut Rect, vel: &mut Vec2, left_paddle: &Rect, right_paddle: &Rect) {
    // Integer positions truncate toward zero, like SDL rect assignment.
    ball.x = (ball.x as f32 + vel.x) as i32;
    ball.y = (ball.y as f32 + vel.y) as i32;

    if ball.y <= 0 || ball.y + BALL_SIZE >= SCREEN_HEIGHT {
        vel.y = -vel.y;
    }

    // The two paddle tests are deliberately independent, never an
    // else-if. A ball overlapping both rects in one frame flips twice.
    if ball.x <= left_paddle.x + PADDLE_WIDTH
        && ball.x >= left_paddle.x
        && ball.y + BALL_SIZE >= left_paddle.y
        && ball.y <= left_paddle.y + PADDLE_HEIGHT
    {
        vel.x = -vel.x;
    }

    if ball.x + BALL_SIZE >= right_paddle.x
        && ball.x <= right_paddle.x + PADDLE_WIDTH
        && ball.y + BALL_SIZE >= right_paddle.y
        && ball.y <= right_paddle.y + PADDLE_HEIGHT
    {
        vel.x = -vel.x;
    }

    // A miss is silent: recenter the ball, pin the horizontal speed to
    // its configured magnitude keeping the current sign, leave the
    // vertical component alone.
    if ball.x <= 0 || ball.x + BALL_SIZE >= SCREEN_WIDTH {
        ball.x = (SCREEN_WIDTH - BALL_SIZE) / 2;
        ball.y = (SCREEN_HEIGHT - BALL_SIZE) / 2;
        vel.x = if vel.x > 0.0 {
            BALL_SPEED_X
        } else {
            -BALL_SPEED_X
        };
    }
}
