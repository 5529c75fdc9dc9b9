//! Fixed-rate frame loop
//!
//! One iteration per frame: poll quit, snapshot keys, move paddles,
//! advance the ball, draw, then sleep a fixed 16 ms. The delay is
//! unconditional regardless of how long the frame's work took; there is
//! no delta-time correction.

use std::thread;

use crate::consts::FRAME_DELAY;
use crate::display::{Color, Display};
use crate::sim::{GameState, advance_ball, apply_input};

/// Loop state. `Running` is initial; the only transition is to
/// `Terminated` when the display reports a quit request, after which the
/// loop exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopPhase {
    Running,
    Terminated,
}

/// Owns the display and the simulation state and drives both.
pub struct App<D> {
    display: D,
    state: GameState,
}

impl<D: Display> App<D> {
    pub fn new(display: D) -> Self {
        Self {
            display,
            state: GameState::new(),
        }
    }

    /// Run frames until quit is requested. Nothing in the loop can fail;
    /// a quit event is the only way out.
    pub fn run(&mut self) {
        while self.frame() == LoopPhase::Running {
            thread::sleep(FRAME_DELAY);
        }
        log::info!("quit requested, leaving frame loop");
    }

    /// One frame: input, physics, render. A quit observed at the top of
    /// the frame terminates before any of those run.
    fn frame(&mut self) -> LoopPhase {
        if self.display.poll_quit() {
            return LoopPhase::Terminated;
        }

        let keys = self.display.held_keys();
        apply_input(&keys, &mut self.state.left_paddle, &mut self.state.right_paddle);

        advance_ball(
            &mut self.state.ball,
            &mut self.state.ball_vel,
            &self.state.left_paddle,
            &self.state.right_paddle,
        );

        self.display.clear(Color::BLACK);
        self.display.fill_rect(&self.state.left_paddle, Color::WHITE);
        self.display.fill_rect(&self.state.right_paddle, Color::WHITE);
        self.display.fill_rect(&self.state.ball, Color::WHITE);
        self.display.present();

        LoopPhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{HeldKeys, Rect};

    /// In-memory display that requests quit after a scripted number of
    /// frames and records every draw call.
    #[derive(Default)]
    struct ScriptedDisplay {
        quit_after: u32,
        polls: u32,
        keys: HeldKeys,
        clears: u32,
        filled: Vec<Rect>,
        presents: u32,
    }

    impl ScriptedDisplay {
        fn quit_after(frames: u32) -> Self {
            Self {
                quit_after: frames,
                ..Default::default()
            }
        }
    }

    impl Display for ScriptedDisplay {
        fn poll_quit(&mut self) -> bool {
            self.polls += 1;
            self.polls > self.quit_after
        }

        fn held_keys(&mut self) -> HeldKeys {
            self.keys
        }

        fn clear(&mut self, _color: Color) {
            self.clears += 1;
        }

        fn fill_rect(&mut self, rect: &Rect, _color: Color) {
            self.filled.push(*rect);
        }

        fn present(&mut self) {
            self.presents += 1;
        }
    }

    #[test]
    fn test_quit_frame_runs_no_physics_or_render() {
        let mut app = App::new(ScriptedDisplay::quit_after(0));
        let before = app.state.clone();

        app.run();

        assert_eq!(app.display.polls, 1);
        assert_eq!(app.display.clears, 0);
        assert_eq!(app.display.presents, 0);
        assert_eq!(app.state.ball, before.ball);
    }

    #[test]
    fn test_frame_draws_paddles_and_ball() {
        let mut app = App::new(ScriptedDisplay::quit_after(2));

        app.run();

        // Two full frames: each clears, fills both paddles plus the
        // ball, and presents once.
        assert_eq!(app.display.clears, 2);
        assert_eq!(app.display.presents, 2);
        assert_eq!(app.display.filled.len(), 6);
        // Ball advanced twice from (315, 235) at (5, 5) per frame.
        assert_eq!((app.state.ball.x, app.state.ball.y), (325, 245));
    }

    #[test]
    fn test_held_keys_reach_the_paddles() {
        let mut display = ScriptedDisplay::quit_after(1);
        display.keys = HeldKeys {
            up_left: true,
            ..Default::default()
        };
        let mut app = App::new(display);

        app.run();

        assert_eq!(app.state.left_paddle.y, 180);
        assert_eq!(app.state.right_paddle.y, 190);
    }
}
