//! Centralized error types for tagdex.

use thiserror::Error;

/// Main error type for tagdex operations.
#[derive(Error, Debug)]
pub enum TagdexError {
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for tagdex operations.
pub type TagdexResult<T> = Result<T, TagdexError>;

impl TagdexError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
