//! Space Battle entry point
//!
//! Loads settings and runs the game loop. No windowing backend is linked in,
//! so the binary drives a scripted single-player round through the headless
//! presentation.

use std::process::ExitCode;

use space_battle::platform::FrameGovernor;
use space_battle::presentation::HeadlessPresentation;
use space_battle::{App, GameError, Settings};

fn run() -> Result<(), GameError> {
    let path = std::env::var("SPACE_BATTLE_SETTINGS").unwrap_or_else(|_| Settings::FILE_NAME.to_string());
    let settings = Settings::load(&path)?;

    let mut port = HeadlessPresentation::demo();
    let mut app = App::new(&settings, &port)?;
    log::info!("Game initialized at {} fps", settings.fps);

    app.run(&mut port, &mut FrameGovernor::new(settings.fps))?;
    if let Some(winner) = app.winner() {
        log::info!("Final result: {}", winner.winner_label());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Space Battle starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal: {}", e);
            ExitCode::FAILURE
        }
    }
}
