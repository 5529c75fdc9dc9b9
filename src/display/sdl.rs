//! SDL2 display backend

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::pixels;
use sdl2::render::WindowCanvas;

use super::{Color, Display, DisplayError};
use crate::sim::{HeldKeys, Rect};

/// Window, renderer and event pump. Everything is released by drop in
/// field order (canvas before the SDL context) on every exit path.
pub struct SdlDisplay {
    canvas: WindowCanvas,
    event_pump: EventPump,
    _sdl: sdl2::Sdl,
}

impl SdlDisplay {
    /// Bring up SDL, a centered window and an accelerated vsync
    /// renderer. Whatever was acquired before a failure is torn down
    /// again before the error is returned.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, DisplayError> {
        let sdl = sdl2::init().map_err(DisplayError::Init)?;
        let video = sdl.video().map_err(DisplayError::Init)?;
        let event_pump = sdl.event_pump().map_err(DisplayError::Init)?;

        let window = video
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| DisplayError::WindowCreate(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| DisplayError::RendererCreate(e.to_string()))?;

        log::info!("display up: {width}x{height} \"{title}\"");

        Ok(Self {
            canvas,
            event_pump,
            _sdl: sdl,
        })
    }

    fn set_color(&mut self, color: Color) {
        self.canvas
            .set_draw_color(pixels::Color::RGB(color.r, color.g, color.b));
    }
}

impl Display for SdlDisplay {
    fn poll_quit(&mut self) -> bool {
        for event in self.event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                return true;
            }
        }
        false
    }

    fn held_keys(&mut self) -> HeldKeys {
        let state = self.event_pump.keyboard_state();
        HeldKeys {
            up_left: state.is_scancode_pressed(Scancode::W),
            down_left: state.is_scancode_pressed(Scancode::S),
            up_right: state.is_scancode_pressed(Scancode::Up),
            down_right: state.is_scancode_pressed(Scancode::Down),
        }
    }

    fn clear(&mut self, color: Color) {
        self.set_color(color);
        self.canvas.clear();
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        self.set_color(color);
        let rect = sdl2::rect::Rect::new(rect.x, rect.y, rect.w as u32, rect.h as u32);
        if let Err(err) = self.canvas.fill_rect(rect) {
            log::warn!("fill_rect failed: {err}");
        }
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
