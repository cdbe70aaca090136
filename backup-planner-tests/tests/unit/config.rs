//! Unit tests for configuration loading and validation
//!
//! These tests verify config parsing, validation, and path resolution.

use backup_planner::config::load_config;
use std::path::Path;
use test_utils::{full_config_toml, ConfigBuilder, Logger, ResultAssertions, TestContext};

#[test]
fn test_config_loading_valid() {
    let (config_path, _temp_dir) = ConfigBuilder::minimal().add_backup("weekly").persist();

    let loaded = load_config(&config_path).assert_ok();
    let names: Vec<_> = loaded.backups().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["daily", "weekly"]);
    assert_eq!(loaded.source_file_path(), config_path.as_path());
}

#[test]
fn test_config_loading_full() {
    let ctx = TestContext::new();
    let config_path = ctx.create_file("etc/backup.toml", full_config_toml());

    let run = load_config(&config_path).assert_ok();

    assert_eq!(run.bootstrap(), Path::new("hooks/bootstrap.sh"));
    assert!(run.verbose());
    assert!(!run.colors());
    assert_eq!(run.loggers().len(), 2);
    assert!(matches!(&run.loggers()[0], Logger::Declared(c) if c.logger_type == "json"));

    // Duplicate names are kept
    assert_eq!(run.backups().len(), 3);
    assert_eq!(run.backups()[0].name, run.backups()[2].name);

    let wd = run.working_directory();
    assert_eq!(wd.path(), ctx.temp_dir().join("etc").as_path());
    assert_eq!(
        run.backups()[0].target.path_name(&wd),
        ctx.temp_dir().join("etc/dumps/app.sql.gz")
    );
    assert_eq!(
        run.backups()[1].target.path_name(&wd),
        Path::new("/var/backups/files/www.tar.zip")
    );
}

#[test]
fn test_config_with_unsupported_compressor() {
    let ctx = TestContext::new();
    let config_path = ctx.create_file(
        "backup.toml",
        r#"
[[backups]]
name = "database"
source = { type = "mysqldump" }
target = { dirname = "dumps", filename = "app.sql", compress = "lzop" }
"#,
    );

    load_config(&config_path).assert_err_contains("Unsupported compressor: lzop");
}

#[test]
fn test_config_with_invalid_logger() {
    let ctx = TestContext::new();
    let config_path = ctx.create_file(
        "backup.toml",
        r#"
[[loggers]]
type = "  "
"#,
    );

    load_config(&config_path).assert_err_contains("Invalid logger");
}

#[test]
fn test_config_missing_target_dirname() {
    let ctx = TestContext::new();
    let config_path = ctx.create_file(
        "backup.toml",
        r#"
[[backups]]
name = "database"
source = { type = "mysqldump" }
target = { dirname = "", filename = "app.sql" }
"#,
    );

    load_config(&config_path).assert_err_contains("target dirname");
}

#[test]
fn test_empty_config_is_valid() {
    let ctx = TestContext::new();
    let config_path = ctx.create_file("backup.toml", "");

    let run = load_config(&config_path).assert_ok();
    assert!(run.backups().is_empty());
    assert!(run.loggers().is_empty());
}
