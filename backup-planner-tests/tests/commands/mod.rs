//! Command tests for backup-planner
//!
//! These tests verify the behavior behind the CLI commands.

mod plan;
