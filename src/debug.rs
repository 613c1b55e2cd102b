//! Logging setup
//!
//! Shared tracing configuration for the whole process.

use std::fs;
use tracing::{Level, debug, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log level when `RUST_LOG` is not set
    pub log_level: Level,
    /// Write JSON log lines to a rolling file instead of the console
    pub enable_file_logging: bool,
    /// Directory for the rolling log files
    pub log_directory: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            enable_file_logging: false,
            log_directory: "logs".to_string(),
        }
    }
}

impl DebugConfig {
    pub fn development() -> Self {
        Self {
            log_level: Level::DEBUG,
            ..Self::default()
        }
    }

    pub fn production() -> Self {
        Self {
            log_level: Level::INFO,
            enable_file_logging: true,
            log_directory: "/var/log/relay-hub".to_string(),
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once at process start; a second call fails because the global
/// subscriber is already set.
pub fn init_logging(config: &DebugConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("relay_hub={}", config.log_level)))?;

    if config.enable_file_logging {
        fs::create_dir_all(&config.log_directory)?;
        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, &config.log_directory, "relay-hub.log");

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(file_appender)
            .json()
            .try_init()?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init()?;
    }

    info!("Logging initialized");
    debug!("Logging configuration: {:?}", config);

    Ok(())
}
