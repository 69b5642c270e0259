//! Configuration validation for the sign-up demo
//!
//! Checks that values loaded from files and the environment are within the
//! ranges the narration can sensibly use.

use super::error::ConfigError;
use super::{DemoConfig, LoggingConfig};

/// Longest step delay accepted, in milliseconds.
pub const MAX_STEP_DELAY_MS: u64 = 10_000;

/// Validates the demo configuration.
///
/// # Errors
///
/// Returns a `ConfigError` if any validation check fails.
pub fn validate_config(config: &DemoConfig) -> Result<(), ConfigError> {
    validate_step_delay(config.step_delay_ms)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_step_delay(step_delay_ms: u64) -> Result<(), ConfigError> {
    if step_delay_ms > MAX_STEP_DELAY_MS {
        return Err(ConfigError::invalid_value(
            "step_delay_ms",
            step_delay_ms,
            format!("step_delay_ms must not exceed {}", MAX_STEP_DELAY_MS),
        ));
    }
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<(), ConfigError> {
    if !config.console && config.level != crate::LogLevel::Off {
        log::debug!(
            "logging.level is {} but console logging is disabled; no log output will be produced",
            config.level
        );
    }
    Ok(())
}
