//! Startup error taxonomy
//!
//! Anything that fails before the first frame is fatal. Failures during a
//! frame are logged where they happen and never surface as errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("SDL initialization failed: {0}")]
    Sdl(String),
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("failed to create renderer: {0}")]
    Canvas(String),
    #[error("failed to initialize image loading: {0}")]
    Image(String),
    #[error("failed to initialize font rendering: {0}")]
    Ttf(String),
    #[error("failed to initialize audio: {0}")]
    Mixer(String),
    #[error("failed to load asset {path}: {reason}")]
    Asset { path: String, reason: String },
}

impl StartupError {
    pub fn asset(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::Asset {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type StartupResult<T> = Result<T, StartupError>;
