//! Unit tests for the run configuration

use std::path::Path;
use std::sync::Arc;
use test_utils::{
    sample_backup, ConfigBuilder, ConfigError, Event, EventDispatcher, Logger, LoggerConfig,
    RecordingListener, RunConfiguration,
};

#[test]
fn test_is_backup_active_without_limit() {
    let run = ConfigBuilder::minimal().add_backup("weekly").build_run();

    assert!(run.is_backup_active("daily"));
    assert!(run.is_backup_active("weekly"));
    assert!(run.is_backup_active("anything"));
}

#[test]
fn test_is_backup_active_with_limit() {
    let mut run = ConfigBuilder::minimal().add_backup("weekly").build_run();
    run.set_limit(["daily"]);

    assert!(run.is_backup_active("daily"));
    assert!(!run.is_backup_active("weekly"));

    let active: Vec<_> = run.active_backups().map(|b| b.name.clone()).collect();
    assert_eq!(active, vec!["daily"]);
}

#[test]
fn test_limit_can_be_cleared() {
    let mut run = RunConfiguration::new();
    run.set_limit(["daily", "weekly"]);
    assert_eq!(run.limit().len(), 2);

    run.set_limit(Vec::<String>::new());
    assert!(run.is_backup_active("monthly"));
}

#[test]
fn test_backups_preserve_insertion_order() {
    let mut run = RunConfiguration::new();
    for name in ["c", "a", "b", "a"] {
        run.add_backup(sample_backup(name));
    }

    let names: Vec<_> = run.backups().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b", "a"]);
}

#[test]
fn test_working_directory_from_source_file() {
    let mut run = RunConfiguration::new();
    run.set_source_file_path("/var/backups/config.xml");
    assert_eq!(run.working_directory().path(), Path::new("/var/backups"));

    // A later load replaces the previous value on this configuration only
    let mut other = RunConfiguration::new();
    other.set_source_file_path("/etc/other/backup.toml");
    assert_eq!(run.working_directory().path(), Path::new("/var/backups"));
    assert_eq!(other.working_directory().path(), Path::new("/etc/other"));
}

#[test]
fn test_invalid_logger_rejected() {
    let mut run = RunConfiguration::new();
    run.add_logger(Logger::observer(RecordingListener::new("printer")))
        .unwrap();

    let result = run.add_logger(Logger::Declared(LoggerConfig::new("")));
    assert!(matches!(result, Err(ConfigError::InvalidLogger(_))));
    assert_eq!(run.loggers().len(), 1);
}

#[test]
fn test_observers_notified_in_order() {
    let first = RecordingListener::new("first");
    let second = RecordingListener::with_journal("second", first.journal());
    let third = RecordingListener::with_journal("third", first.journal());

    let mut run = RunConfiguration::new();
    run.add_logger(Logger::observer(first.clone())).unwrap();
    run.add_logger(Logger::observer(second)).unwrap();
    run.add_logger(Logger::Declared(LoggerConfig::new("json").with_option("target", "x.json")))
        .unwrap();
    run.add_logger(Logger::Observer(Arc::new(third))).unwrap();

    let dispatcher = EventDispatcher::from_configuration(&run);
    dispatcher.dispatch(&Event::BackupStart {
        name: "daily".to_string(),
    });

    let journal = first.journal();
    let order: Vec<_> = journal
        .lock()
        .unwrap()
        .iter()
        .map(|r| r.listener.clone())
        .collect();
    assert_eq!(order, vec!["first", "second", "third"]);
}

#[test]
fn test_flags_round_trip() {
    let mut run = RunConfiguration::new();
    run.set_verbose(true);
    run.set_colors(true);
    run.set_debug(true);
    run.set_simulate(true);
    run.set_restore(true);

    assert!(run.verbose() && run.colors() && run.debug());
    assert!(run.is_simulation() && run.is_restore());

    run.set_debug(false);
    assert!(!run.debug());
    assert!(run.verbose());
}
