//! Error types for UCCMon

use thiserror::Error;

/// UCCMon error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing or malformed configuration parameter, fatal at construction
    #[error("Configuration error: {0}")]
    Config(String),

    /// Structurally valid input with unusable values
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
