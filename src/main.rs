//! Space Shooter entry point
//!
//! Sets up logging and runs the game. Exits with 1 if startup fails.

use std::process::ExitCode;

use space_shooter::{Settings, app};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Space Shooter starting...");

    let settings = Settings::load();

    match app::run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
