//! Pure simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform
//! dependencies:
//! - Fixed timestep only
//! - No rendering or SDL types
//!
//! The frame loop calls [`apply_input`] then [`advance_ball`] once per
//! frame, in that order.

pub mod input;
pub mod physics;
pub mod state;

pub use input::{HeldKeys, apply_input};
pub use physics::advance_ball;
pub use state::{GameState, Rect};
