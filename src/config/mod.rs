//! Configuration management for the sign-up demo
//!
//! Settings come from a TOML file, then `SIGNUP_DEMO_*` environment
//! variables, then whatever the command line overrides. Every source is
//! optional; the defaults reproduce the classic interactive walkthrough.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod validation;

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod validation_tests;

#[cfg(test)]
#[path = "tests/config_mod_tests.rs"]
mod config_mod_tests;

use std::{
    env,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use directories::ProjectDirs;

use serde::{Deserialize, Serialize};

use crate::LogLevel;

/// Re-export the error type
pub use error::ConfigError;

/// The environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "SIGNUP_DEMO_";

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "signup-demo.toml";

/// The application name used for finding config directories
const APP_NAME: &str = "autosignup-demo";

/// Where the file-level settings of a loaded [`DemoConfig`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file
    File(PathBuf),
    /// The file at this path does not exist; built-in defaults were used
    Defaults(PathBuf),
}

/// Main configuration structure for the demo.
///
/// # Example
///
/// ```no_run
/// use autosignup_demo::config::DemoConfig;
///
/// // A missing file falls back to defaults.
/// let config = DemoConfig::load("path/that/does/not/exist.toml").unwrap();
/// assert_eq!(config.step_delay_ms, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Seed for the profile generator; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Pause after each narrated step, in milliseconds
    pub step_delay_ms: u64,
    /// Whether to wait for Enter between demo routines
    pub pause_between_demos: bool,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,
    /// Whether to log to the console (stderr)
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            console: true,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            step_delay_ms: 500,
            pause_between_demos: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Loads the configuration from `path`.
    ///
    /// The configuration is assembled in the following order:
    /// 1. From the file at `path`, or built-in defaults when it does not exist
    /// 2. From environment variables with the `SIGNUP_DEMO_` prefix
    ///
    /// The result is validated before it is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, if an
    /// environment override cannot be parsed, or if validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::load_with_source(path).map(|(config, _)| config)
    }

    /// Like [`DemoConfig::load`], but also reports whether the file was found.
    ///
    /// Nothing is logged here; the caller decides how to report a fallback to
    /// defaults once its logger is up.
    pub fn load_with_source<P: AsRef<Path>>(path: P) -> Result<(Self, ConfigSource), ConfigError> {
        let path = path.as_ref();

        let (mut config, source) = match fs::read_to_string(path) {
            Ok(config_str) => {
                let config = toml::from_str::<DemoConfig>(&config_str).map_err(|source| {
                    ConfigError::ParseError { path: path.to_path_buf(), source }
                })?;
                (config, ConfigSource::File(path.to_path_buf()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                (Self::default(), ConfigSource::Defaults(path.to_path_buf()))
            }
            Err(source) => {
                return Err(ConfigError::Unreadable { path: path.to_path_buf(), source });
            }
        };

        config.apply_env_vars()?;
        config.validate()?;
        Ok((config, source))
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Variables are prefixed with `SIGNUP_DEMO_` and use `_` as a separator,
    /// e.g. `SIGNUP_DEMO_LOGGING_LEVEL=debug`.
    ///
    /// # Errors
    ///
    /// Returns an error if any recognised variable cannot be parsed.
    pub fn apply_env_vars(&mut self) -> Result<(), ConfigError> {
        for (key, value) in env::vars() {
            if let Some(stripped) = key.strip_prefix(ENV_PREFIX) {
                let value = value.trim();
                if value.is_empty() {
                    continue;
                }

                match stripped.to_lowercase().as_str() {
                    "seed" => {
                        self.seed = Some(value.parse().map_err(|_| {
                            ConfigError::invalid_value("seed", value, "Seed must be an unsigned integer")
                        })?);
                    }
                    "step_delay_ms" => {
                        self.step_delay_ms = value.parse().map_err(|_| {
                            ConfigError::invalid_value(
                                "step_delay_ms",
                                value,
                                "Delay must be a whole number of milliseconds",
                            )
                        })?;
                    }
                    "pause_between_demos" => {
                        self.pause_between_demos = parse_bool(value).ok_or_else(|| {
                            ConfigError::invalid_value("pause_between_demos", value, "Expected true or false")
                        })?;
                    }
                    "logging_level" => {
                        self.logging.level = value.parse().map_err(|_| {
                            ConfigError::invalid_value("logging.level", value, "Invalid log level")
                        })?;
                    }
                    other => log::debug!("Ignoring unknown override {}{}", ENV_PREFIX, other.to_uppercase()),
                }
            }
        }

        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// The per-step narration delay as a [`Duration`].
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// Returns the directory where configuration files should be stored.
    ///
    /// This is OS-specific:
    /// - Linux: `$HOME/.config/autosignup-demo`
    /// - macOS: `$HOME/Library/Application Support/com.autosignup.autosignup-demo`
    /// - Windows: `%APPDATA%\\autosignup\\autosignup-demo`
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "autosignup", APP_NAME)
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }

    /// The file to load when none is named: `./signup-demo.toml` if present,
    /// otherwise the same file name inside [`DemoConfig::config_dir`].
    pub fn default_path() -> PathBuf {
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return local;
        }
        Self::config_dir()
            .map(|dir| dir.join(DEFAULT_CONFIG_FILE))
            .unwrap_or(local)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
