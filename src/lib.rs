// src/lib.rs

//! Narrated walkthrough of automatic sign-up and login flows.
//!
//! The crate fabricates user profiles in memory and prints a paced,
//! step-by-step story of Google login, email sign-up and phone sign-up,
//! followed by showcases of the generated data and the access levels.
//! Nothing is authenticated, persisted or sent anywhere.

pub mod config;
pub mod demo;
#[cfg(feature = "cli")]
pub mod demo_cli;
pub mod error;
pub mod storage;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use config::{ConfigSource, DemoConfig, LoggingConfig};
pub use demo::{DemoContext, DemoKind, DemoRunner, FlowOutcome, ProfileGenerator, RunSummary};
pub use error::{DemoError, Result};
pub use storage::MemoryUserStore;
pub use types::{AccessFlags, AccessLevel, Gender, Intention, LogLevel, Orientation, UserRecord};

/// Load configuration and install the logger.
///
/// Without `config_path` the file comes from [`DemoConfig::default_path`].
/// Fails with [`DemoError::InvalidInput`] if a logger is already installed.
pub fn init(config_path: Option<&str>) -> Result<DemoConfig> {
    let path = config_path
        .map(std::path::PathBuf::from)
        .unwrap_or_else(DemoConfig::default_path);
    let (config, source) = DemoConfig::load_with_source(&path)?;
    init_logging(&config.logging)?;
    match source {
        ConfigSource::File(path) => log::debug!("Loaded configuration from {}", path.display()),
        ConfigSource::Defaults(path) => {
            log::warn!("Config file not found at {}, using defaults", path.display())
        }
    }
    log::debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Install `env_logger` writing to stderr at the configured level.
#[cfg(feature = "logging")]
pub fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let level = if logging.console {
        logging.level.into()
    } else {
        log::LevelFilter::Off
    };
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init()
        .map_err(|e| DemoError::invalid_input(format!("Logger already initialized: {}", e)))
}

/// Logging is compiled out; nothing to install.
#[cfg(not(feature = "logging"))]
pub fn init_logging(_logging: &LoggingConfig) -> Result<()> {
    Ok(())
}
