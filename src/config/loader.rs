use super::run::{Logger, RunConfiguration};
use super::types::*;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unsupported compressor: {0}")]
    UnsupportedCompressor(String),

    #[error("Invalid logger: {0}")]
    InvalidLogger(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Load and validate a run configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RunConfiguration> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let file: ConfigFile = toml::from_str(&contents)?;

    let mut run = RunConfiguration::new();
    run.set_source_file_path(path);
    apply_config(&mut run, file)?;

    info!(
        "Loaded {} backup(s) and {} logger(s) from {:?}",
        run.backups().len(),
        run.loggers().len(),
        path
    );
    Ok(run)
}

/// Apply a parsed configuration file to a run configuration
pub fn apply_config(run: &mut RunConfiguration, file: ConfigFile) -> Result<()> {
    if let Some(bootstrap) = file.app.bootstrap {
        run.set_bootstrap(bootstrap);
    }
    run.set_verbose(file.app.verbose);
    run.set_colors(file.app.colors);
    run.set_debug(file.app.debug);

    for (index, logger) in file.loggers.into_iter().enumerate() {
        run.add_logger(Logger::Declared(logger)).map_err(|e| match e {
            ConfigError::InvalidLogger(reason) => {
                ConfigError::InvalidLogger(format!("logger #{}: {}", index + 1, reason))
            }
            other => other,
        })?;
    }

    for backup in file.backups {
        run.add_backup(BackupDefinition::from_config(backup)?);
    }

    Ok(())
}
