//! Backup Planner Library
//!
//! This library models a backup plan: which backups exist, how their output is
//! compressed, which loggers observe the run and which backups are active.

pub mod config;
pub mod managers;

// Re-export commonly used types
pub use config::{
    load_config, BackupDefinition, Compression, Compressor, ConfigError, Logger, LoggerConfig,
    RunConfiguration, WorkingDirectory,
};
pub use managers::events::{Event, EventDispatcher, Listener, TracingListener};
pub use managers::logging::{init_console_logging, LoggingConfig};
pub use managers::plan::{CompressionStrategy, PlanManager, PlannedBackup};
