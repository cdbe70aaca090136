//! Console logging
//!
//! The level follows the run flags: `debug` shows everything down to DEBUG,
//! `verbose` shows INFO, otherwise only warnings and errors. `RUST_LOG`
//! overrides both.

use anyhow::{anyhow, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::RunConfiguration;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: Level,
    /// ANSI colors on the console
    pub colors: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            colors: false,
        }
    }
}

impl LoggingConfig {
    /// Create from run flags
    pub fn from_flags(verbose: bool, debug: bool, colors: bool) -> Self {
        let level = if debug {
            Level::DEBUG
        } else if verbose {
            Level::INFO
        } else {
            Level::WARN
        };

        Self { level, colors }
    }

    pub fn from_run(config: &RunConfiguration) -> Self {
        Self::from_flags(config.verbose(), config.debug(), config.colors())
    }
}

/// Initialize console logging on stderr
pub fn init_console_logging(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(level_filter(config.level))
        .with_writer(std::io::stderr)
        .with_ansi(config.colors)
        .with_target(false)
        .with_level(true)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

/// Create a level filter, preferring RUST_LOG when it is set
fn level_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()))
}
