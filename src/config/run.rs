//! The assembled backup plan of one invocation

use std::collections::BTreeSet;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use super::expand_tilde;
use super::loader::{ConfigError, Result};
use super::types::{BackupDefinition, LoggerConfig};
use crate::managers::events::Listener;

/// Base directory for relative paths of a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDirectory(PathBuf);

impl WorkingDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// The process's current directory
    pub fn current() -> Self {
        Self(env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Directory containing `file`, `None` for an empty path
    pub fn of_file(file: &Path) -> Option<Self> {
        let dir = match file.parent() {
            Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
            Some(parent) => parent.to_path_buf(),
            None if file.has_root() => file.to_path_buf(),
            None => return None,
        };
        Some(Self(dir))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Resolve `path` against this directory; absolute paths are kept
    pub fn resolve(&self, path: &Path) -> PathBuf {
        let path = expand_tilde(path);
        if path.is_absolute() {
            path
        } else {
            self.0.join(path)
        }
    }
}

impl fmt::Display for WorkingDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Something that observes a run
#[derive(Clone)]
pub enum Logger {
    /// Ready-made listener, notified directly
    Observer(Arc<dyn Listener>),
    /// Logger the runner still has to build from its configuration
    Declared(LoggerConfig),
}

impl Logger {
    pub fn observer<L: Listener + 'static>(listener: L) -> Self {
        Logger::Observer(Arc::new(listener))
    }

    fn validate(&self) -> Result<()> {
        match self {
            Logger::Observer(_) => Ok(()),
            Logger::Declared(config) if config.logger_type.trim().is_empty() => {
                Err(ConfigError::InvalidLogger(
                    "logger configuration has no type".to_string(),
                ))
            }
            Logger::Declared(_) => Ok(()),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Logger::Observer(listener) => {
                f.debug_tuple("Observer").field(&listener.name()).finish()
            }
            Logger::Declared(config) => f.debug_tuple("Declared").field(config).finish(),
        }
    }
}

/// Backups, loggers and run flags of one invocation
#[derive(Debug, Clone, Default)]
pub struct RunConfiguration {
    source_file_path: PathBuf,
    bootstrap: PathBuf,
    verbose: bool,
    colors: bool,
    debug: bool,
    simulate: bool,
    restore: bool,
    loggers: Vec<Logger>,
    backups: Vec<BackupDefinition>,
    limit: BTreeSet<String>,
    working_directory: Option<WorkingDirectory>,
}

impl RunConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where the configuration came from.
    ///
    /// Its directory becomes the working directory of the plan. An empty
    /// path leaves the working directory unset.
    pub fn set_source_file_path(&mut self, path: impl Into<PathBuf>) {
        self.source_file_path = path.into();
        self.working_directory = WorkingDirectory::of_file(&self.source_file_path);
        if let Some(ref working_directory) = self.working_directory {
            debug!(
                "Working directory set to {} from {:?}",
                working_directory, self.source_file_path
            );
        }
    }

    pub fn source_file_path(&self) -> &Path {
        &self.source_file_path
    }

    /// Directory of the configuration file, or the current directory
    pub fn working_directory(&self) -> WorkingDirectory {
        self.working_directory
            .clone()
            .unwrap_or_else(WorkingDirectory::current)
    }

    pub fn set_bootstrap(&mut self, path: impl Into<PathBuf>) {
        self.bootstrap = path.into();
    }

    pub fn bootstrap(&self) -> &Path {
        &self.bootstrap
    }

    /// Restrict the run to the named backups; an empty limit runs everything
    pub fn set_limit<I, S>(&mut self, limit: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.limit = limit.into_iter().map(Into::into).collect();
        debug!("Backup limit: {:?}", self.limit);
    }

    pub fn limit(&self) -> &BTreeSet<String> {
        &self.limit
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_colors(&mut self, colors: bool) {
        self.colors = colors;
    }

    pub fn colors(&self) -> bool {
        self.colors
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Pretend to run without executing anything
    pub fn set_simulate(&mut self, simulate: bool) {
        self.simulate = simulate;
    }

    pub fn is_simulation(&self) -> bool {
        self.simulate
    }

    /// Show how to restore the backups instead of creating them
    pub fn set_restore(&mut self, restore: bool) {
        self.restore = restore;
    }

    pub fn is_restore(&self) -> bool {
        self.restore
    }

    /// Add a logger, rejecting declarations without a type
    pub fn add_logger(&mut self, logger: Logger) -> Result<()> {
        logger.validate()?;
        debug!("Adding logger {:?}", logger);
        self.loggers.push(logger);
        Ok(())
    }

    pub fn loggers(&self) -> &[Logger] {
        &self.loggers
    }

    /// Ready-made listeners in the order they were added
    pub fn listeners(&self) -> impl Iterator<Item = &Arc<dyn Listener>> {
        self.loggers.iter().filter_map(|logger| match logger {
            Logger::Observer(listener) => Some(listener),
            Logger::Declared(_) => None,
        })
    }

    /// Append a backup. Names are not required to be unique.
    pub fn add_backup(&mut self, backup: BackupDefinition) {
        debug!("Adding backup '{}'", backup.name);
        self.backups.push(backup);
    }

    pub fn backups(&self) -> &[BackupDefinition] {
        &self.backups
    }

    pub fn is_backup_active(&self, name: &str) -> bool {
        self.limit.is_empty() || self.limit.contains(name)
    }

    /// Backups that pass the limit, in configuration order
    pub fn active_backups(&self) -> impl Iterator<Item = &BackupDefinition> {
        self.backups
            .iter()
            .filter(|backup| self.is_backup_active(&backup.name))
    }
}
