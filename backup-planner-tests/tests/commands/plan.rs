//! Tests for the 'plan' command
//!
//! The plan command lists every backup with its activation and output file.

use backup_planner::config::load_config;
use backup_planner::managers::plan::{CompressionStrategy, PlanManager};
use test_utils::{ConfigBuilder, Event, Logger, RecordingListener};

#[test]
fn test_plan_all_backups_active() {
    let run = ConfigBuilder::minimal()
        .add_compressed_backup("weekly", "bzip2")
        .add_backup("files")
        .build_run();

    let planned = PlanManager::new(&run).plan();

    assert_eq!(planned.len(), 3);
    assert!(planned.iter().all(|p| p.active));
    assert_eq!(planned[0].strategy, Some(CompressionStrategy::Pipe));
    assert_eq!(planned[2].strategy, None);
}

#[test]
fn test_plan_with_limit() {
    let mut run = ConfigBuilder::minimal().add_backup("weekly").build_run();
    run.set_limit(["weekly"]);

    let planned = PlanManager::new(&run).plan();
    let active: Vec<_> = planned
        .iter()
        .filter(|p| p.active)
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(active, vec!["weekly"]);
}

#[test]
fn test_plan_targets_use_config_directory() {
    let (config_path, temp_dir) = ConfigBuilder::minimal().persist();
    let run = load_config(&config_path).unwrap();

    let planned = PlanManager::new(&run).plan();
    let expected = temp_dir.path().join("backups").join("daily.tar.gz");
    assert_eq!(planned[0].target, expected.display().to_string());
}

#[test]
fn test_plan_zip_needs_temp_file() {
    let run = ConfigBuilder::new()
        .add_compressed_backup("archive", "zip")
        .build_run();

    let planned = PlanManager::new(&run).plan();
    assert_eq!(planned[0].strategy, Some(CompressionStrategy::TempFile));
    assert_eq!(planned[0].mime_type.as_deref(), Some("application/zip"));
}

#[test]
fn test_plan_events() {
    let listener = RecordingListener::new("recorder");
    let mut run = ConfigBuilder::minimal().add_backup("weekly").build_run();
    run.add_logger(Logger::observer(listener.clone())).unwrap();
    run.set_limit(["daily"]);

    PlanManager::new(&run).plan();

    let events = listener.events();
    assert_eq!(events.first(), Some(&Event::AppStart { simulate: false }));
    assert!(events.contains(&Event::BackupSkipped {
        name: "weekly".to_string()
    }));
    assert!(!events.contains(&Event::BackupSkipped {
        name: "daily".to_string()
    }));
    assert_eq!(events.last(), Some(&Event::AppEnd));
}

#[test]
fn test_plan_json_shape() {
    let run = ConfigBuilder::minimal().build_run();
    let planned = PlanManager::new(&run).plan();

    let json = serde_json::to_value(&planned).unwrap();
    assert_eq!(json[0]["name"], "daily");
    assert_eq!(json[0]["active"], true);
    assert_eq!(json[0]["strategy"], "pipe");
    assert_eq!(json[0]["mime_type"], "application/x-gzip");
}
