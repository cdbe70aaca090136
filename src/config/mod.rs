//! Configuration module for backup-planner
//!
//! This module models the backup plan and loads it from TOML files.
//!
//! ## Activation
//!
//! Every configured backup is a candidate. A backup is active when:
//! 1. No limit is set, or
//! 2. Its name is listed in the limit (exact match)
//!
//! ## Example Usage
//!
//! ```no_run
//! use backup_planner::config;
//!
//! let run = config::load_config("backup.toml")?;
//!
//! for backup in run.backups() {
//!     println!("{}: active={}", backup.name, run.is_backup_active(&backup.name));
//! }
//! # Ok::<(), backup_planner::config::ConfigError>(())
//! ```

mod compression;
mod loader;
mod run;
mod types;

pub use compression::{Compression, Compressor};
pub use loader::{apply_config, load_config, ConfigError, Result};
pub use run::{Logger, RunConfiguration, WorkingDirectory};
pub use types::*;

/// Expand tilde (~) in path
pub fn expand_tilde(path: &std::path::Path) -> std::path::PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}
