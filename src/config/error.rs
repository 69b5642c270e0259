//! Error types for configuration handling

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, overriding or validating a [`DemoConfig`](super::DemoConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("Cannot read configuration file {}: {source}", path.display())]
    Unreadable {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("Failed to parse configuration {}: {source}", path.display())]
    ParseError {
        /// File that was being parsed.
        path: PathBuf,
        /// Parser failure, including the offending key or line.
        source: toml::de::Error,
    },

    /// A setting is out of range or cannot be parsed.
    #[error("Invalid value for '{field}': '{value}'. {reason}")]
    InvalidValue {
        /// The name of the setting.
        field: String,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Creates a new invalid value error.
    pub fn invalid_value<S1, S2, S3>(field: S1, value: S2, reason: S3) -> Self
    where
        S1: Into<String>,
        S2: std::fmt::Display,
        S3: Into<String>,
    {
        ConfigError::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
