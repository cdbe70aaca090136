use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::compression::Compression;
use super::loader::{ConfigError, Result};
use super::run::WorkingDirectory;

/// Root structure of a configuration file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub loggers: Vec<LoggerConfig>,

    #[serde(default)]
    pub backups: Vec<BackupConfig>,
}

/// Application level settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Script the runner executes before any backup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrap: Option<PathBuf>,

    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub colors: bool,
    #[serde(default)]
    pub debug: bool,
}

/// Declared logger, instantiated later by the runner
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggerConfig {
    #[serde(rename = "type")]
    pub logger_type: String,

    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl LoggerConfig {
    pub fn new(logger_type: impl Into<String>) -> Self {
        Self {
            logger_type: logger_type.into(),
            options: BTreeMap::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// Backup section as written in the configuration file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackupConfig {
    pub name: String,

    /// Abort the whole run when this backup fails
    #[serde(default)]
    pub stop_on_failure: bool,

    pub source: SourceConfig,

    pub target: TargetConfig,
}

/// What gets dumped or archived
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    #[serde(rename = "type")]
    pub source_type: String,

    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

/// Where the backup is written, as written in the configuration file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetConfig {
    /// Relative directories are resolved against the working directory
    pub dirname: PathBuf,

    pub filename: String,

    /// Compressor name or path to the compressor binary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<String>,
}

/// A single backup of the plan
#[derive(Debug, Clone)]
pub struct BackupDefinition {
    pub name: String,
    pub stop_on_failure: bool,
    pub source: SourceConfig,
    pub target: Target,
}

impl BackupDefinition {
    /// Convert a file section, creating the target's compression
    pub fn from_config(config: BackupConfig) -> Result<Self> {
        let compression = config
            .target
            .compress
            .as_deref()
            .map(Compression::create)
            .transpose()?;

        let definition = Self {
            name: config.name,
            stop_on_failure: config.stop_on_failure,
            source: config.source,
            target: Target {
                dirname: config.target.dirname,
                filename: config.target.filename,
                compression,
            },
        };
        definition.validate()?;
        Ok(definition)
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Backup name must not be empty".to_string(),
            ));
        }

        if self.source.source_type.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "Backup '{}': source type must not be empty",
                self.name
            )));
        }

        if self.target.dirname.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "Backup '{}': target dirname must not be empty",
                self.name
            )));
        }

        if self.target.filename.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "Backup '{}': target filename must not be empty",
                self.name
            )));
        }

        Ok(())
    }
}

/// Backup output location
#[derive(Debug, Clone)]
pub struct Target {
    pub dirname: PathBuf,
    pub filename: String,
    pub compression: Option<Compression>,
}

impl Target {
    /// File name including the compression suffix
    pub fn file_name(&self) -> String {
        match &self.compression {
            Some(compression) => format!("{}.{}", self.filename, compression.suffix()),
            None => self.filename.clone(),
        }
    }

    /// MIME type of the produced file, when it is compressed
    pub fn mime_type(&self) -> Option<&'static str> {
        self.compression.as_ref().map(Compression::mime_type)
    }

    pub fn resolve_dirname(&self, working_dir: &WorkingDirectory) -> PathBuf {
        working_dir.resolve(&self.dirname)
    }

    /// Full path of the produced file
    pub fn path_name(&self, working_dir: &WorkingDirectory) -> PathBuf {
        self.resolve_dirname(working_dir).join(self.file_name())
    }
}
