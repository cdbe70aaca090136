//! Fluent API for building test configurations
//!
//! Provides a builder pattern for creating test configurations with sensible defaults.

use backup_planner::config::{
    apply_config, AppConfig, BackupConfig, ConfigFile, LoggerConfig, RunConfiguration,
    SourceConfig, TargetConfig,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builder for creating test configurations
pub struct ConfigBuilder {
    temp_dir: TempDir,
    app: AppConfig,
    loggers: Vec<LoggerConfig>,
    backups: Vec<BackupConfig>,
}

impl ConfigBuilder {
    /// Create a new ConfigBuilder without any backups
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        Self {
            temp_dir,
            app: AppConfig::default(),
            loggers: Vec::new(),
            backups: Vec::new(),
        }
    }

    /// Create a minimal config with a single gzip compressed backup named "daily"
    pub fn minimal() -> Self {
        Self::new().add_compressed_backup("daily", "gzip")
    }

    /// Set the bootstrap script
    pub fn with_bootstrap(mut self, path: &str) -> Self {
        self.app.bootstrap = Some(PathBuf::from(path));
        self
    }

    /// Enable verbose output in the file
    pub fn verbose(mut self) -> Self {
        self.app.verbose = true;
        self
    }

    /// Enable debug output in the file
    pub fn debug(mut self) -> Self {
        self.app.debug = true;
        self
    }

    /// Add an uncompressed tar backup
    pub fn add_backup(mut self, name: &str) -> Self {
        self.backups.push(backup_config(name, None));
        self
    }

    /// Add a tar backup compressed with `compress`
    pub fn add_compressed_backup(mut self, name: &str, compress: &str) -> Self {
        self.backups.push(backup_config(name, Some(compress)));
        self
    }

    /// Add a declared logger of the given type
    pub fn add_logger(mut self, logger_type: &str) -> Self {
        self.loggers.push(LoggerConfig::new(logger_type));
        self
    }

    /// Build the configuration file structure
    pub fn build(self) -> ConfigFile {
        ConfigFile {
            app: self.app,
            loggers: self.loggers,
            backups: self.backups,
        }
    }

    /// Build a run configuration without going through a file
    pub fn build_run(self) -> RunConfiguration {
        let mut run = RunConfiguration::new();
        apply_config(&mut run, self.build()).expect("Failed to apply test configuration");
        run
    }

    /// Write the configuration to `backup.toml` in the temp dir
    ///
    /// Returns the file path and the TempDir (which must be kept alive).
    pub fn persist(self) -> (PathBuf, TempDir) {
        let config_path = self.temp_dir.path().join("backup.toml");
        let file = ConfigFile {
            app: self.app,
            loggers: self.loggers,
            backups: self.backups,
        };

        let toml_str = toml::to_string_pretty(&file).expect("Failed to serialize config");
        fs::write(&config_path, toml_str).expect("Failed to write config file");

        (config_path, self.temp_dir)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn backup_config(name: &str, compress: Option<&str>) -> BackupConfig {
    BackupConfig {
        name: name.to_string(),
        stop_on_failure: false,
        source: SourceConfig {
            source_type: "tar".to_string(),
            options: BTreeMap::from([("path".to_string(), format!("/srv/{}", name))]),
        },
        target: TargetConfig {
            dirname: PathBuf::from("backups"),
            filename: format!("{}.tar", name),
            compress: compress.map(str::to_string),
        },
    }
}
