//! Test utilities for backup-planner
//!
//! This crate provides shared test utilities, fixtures and helper functions
//! for testing the backup-planner library.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_utils::{ConfigBuilder, TestContext};
//!
//! #[test]
//! fn my_test() {
//!     let run = ConfigBuilder::minimal()
//!         .add_backup("weekly")
//!         .build_run();
//!     // ... test code
//! }
//! ```

pub mod config_builder;
pub mod fixtures;
pub mod test_context;

// Re-export commonly used items
pub use config_builder::ConfigBuilder;
pub use fixtures::*;
pub use test_context::{ResultAssertions, TestContext};

// Re-export types from the main crate for convenience
pub use backup_planner::config::{
    Compression, Compressor, ConfigError, Logger, LoggerConfig, RunConfiguration,
};
pub use backup_planner::managers::events::mock::RecordingListener;
pub use backup_planner::managers::events::{Event, EventDispatcher};
