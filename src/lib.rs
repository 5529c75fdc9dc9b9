//! Duo Pong - classic two-player Pong
//!
//! Core modules:
//! - `sim`: Pure simulation (paddle input mapping, ball physics)
//! - `display`: Window/renderer/input seam and the SDL2 backend
//! - `app`: Fixed-rate frame loop tying simulation to the display

pub mod app;
pub mod display;
pub mod sim;

pub use app::App;
pub use display::{Color, Display, DisplayError, SdlDisplay};
pub use sim::GameState;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Window title
    pub const WINDOW_TITLE: &str = "Pong Paddles";

    /// Play field dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 100;
    /// Horizontal distance from a paddle to its screen edge
    pub const PADDLE_OFFSET: i32 = 50;
    /// Pixels a paddle moves per frame while a key is held
    pub const PADDLE_SPEED: i32 = 10;

    /// Ball dimensions (square bounding box)
    pub const BALL_SIZE: i32 = 10;
    /// Ball velocity component magnitudes; only the signs ever change
    pub const BALL_SPEED_X: f32 = 5.0;
    pub const BALL_SPEED_Y: f32 = 5.0;

    /// Unconditional per-frame delay (~60 Hz), not delta-corrected
    pub const FRAME_DELAY: Duration = Duration::from_millis(16);
}
