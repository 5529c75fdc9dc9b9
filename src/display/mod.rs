//! Window/renderer/input seam
//!
//! The frame loop talks to the platform through the [`Display`] trait so
//! the simulation stays free of SDL types. [`SdlDisplay`] is the real
//! backend; tests substitute scripted ones.

use std::error::Error;
use std::fmt;

use crate::sim::{HeldKeys, Rect};

mod sdl;

pub use sdl::SdlDisplay;

/// Opaque RGB draw color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
}

/// Errors that can occur while bringing the display up.
///
/// All are fatal to the process; once a backend is constructed its
/// operations are treated as infallible.
#[derive(Debug)]
pub enum DisplayError {
    /// SDL context or one of its subsystems failed to start
    Init(String),
    /// Window creation failed
    WindowCreate(String),
    /// Renderer creation failed
    RendererCreate(String),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Init(msg) => write!(f, "failed to initialize SDL: {msg}"),
            DisplayError::WindowCreate(msg) => write!(f, "failed to create window: {msg}"),
            DisplayError::RendererCreate(msg) => write!(f, "failed to create renderer: {msg}"),
        }
    }
}

impl Error for DisplayError {}

/// Platform surface the frame loop drives.
pub trait Display {
    /// Drain pending events; true if a quit was requested since the
    /// last call.
    fn poll_quit(&mut self) -> bool;

    /// Snapshot of the currently held movement keys.
    fn held_keys(&mut self) -> HeldKeys;

    /// Clear the whole frame to `color`.
    fn clear(&mut self, color: Color);

    /// Fill one rectangle with `color`.
    fn fill_rect(&mut self, rect: &Rect, color: Color);

    /// Flip the finished frame to the screen.
    fn present(&mut self);
}
