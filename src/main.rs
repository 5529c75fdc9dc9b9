//! Duo Pong entry point
//!
//! Brings the display up and runs the frame loop.

use std::process;

use duo_pong::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use duo_pong::{App, DisplayError, SdlDisplay};

fn main() {
    env_logger::init();
    log::info!("Duo Pong starting...");

    if let Err(err) = run() {
        log::error!("{err}");
        process::exit(1);
    }

    log::info!("Duo Pong finished");
}

/// Acquire the display and hand control to the frame loop. Returning the
/// error (instead of exiting here) lets every partially-acquired SDL
/// resource drop before the process terminates.
fn run() -> Result<(), DisplayError> {
    let display = SdlDisplay::new(WINDOW_TITLE, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)?;
    App::new(display).run();
    Ok(())
}
