//! Unit tests for backup-planner
//!
//! These tests exercise the library through its public API.

mod config;
mod run_configuration;
