//! Session error types

use ohaeng_types::OhaengError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Invalid profile or response input
    #[error(transparent)]
    Input(#[from] OhaengError),

    /// Session file could not be read or written
    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),

    /// Session file is not valid JSON
    #[error("session encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;
