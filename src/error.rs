//! Error types for the sign-up demo
//!
//! The demo flows themselves have no failure path; everything that can go
//! wrong lives at the edges (terminal I/O, configuration files, JSON output).
//! `DemoError` gathers those conditions behind a single type.

use thiserror::Error;

/// Main error type for the sign-up demo
#[derive(Error, Debug)]
pub enum DemoError {
    /// I/O operation failed (writing narration, reading the continue prompt)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error (JSON): {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for operations that can fail with a [DemoError]
pub type Result<T> = std::result::Result<T, DemoError>;

impl DemoError {
    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        DemoError::InvalidInput(msg.into())
    }
}
