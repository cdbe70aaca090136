//! Test fixtures and sample data
//!
//! Provides configuration files and definitions for testing.

use backup_planner::config::{BackupConfig, BackupDefinition, SourceConfig, TargetConfig};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Compressor names with the suffix and MIME type they must produce
pub const COMPRESSOR_TABLE: [(&str, &str, &str, bool); 3] = [
    ("gzip", "gz", "application/x-gzip", true),
    ("bzip2", "bz2", "application/x-bzip2", true),
    ("zip", "zip", "application/zip", false),
];

/// Create a backup definition writing `<name>.sql.gz` to `/var/backups`
pub fn sample_backup(name: &str) -> BackupDefinition {
    BackupDefinition::from_config(BackupConfig {
        name: name.to_string(),
        stop_on_failure: false,
        source: SourceConfig {
            source_type: "mysqldump".to_string(),
            options: BTreeMap::from([("databases".to_string(), name.to_string())]),
        },
        target: TargetConfig {
            dirname: PathBuf::from("/var/backups"),
            filename: format!("{}.sql", name),
            compress: Some("gzip".to_string()),
        },
    })
    .expect("Sample backup should be valid")
}

/// A complete configuration file using every section
pub fn full_config_toml() -> &'static str {
    r#"
[app]
bootstrap = "hooks/bootstrap.sh"
verbose = true
colors = false
debug = false

[[loggers]]
type = "json"
options = { target = "logs/run.json" }

[[loggers]]
type = "mail"
options = { recipients = "ops@example.com", sendOnlyOnError = "true" }

[[backups]]
name = "database"
stop_on_failure = true
source = { type = "mysqldump", options = { databases = "app" } }
target = { dirname = "dumps", filename = "app.sql", compress = "gzip" }

[[backups]]
name = "files"
source = { type = "tar", options = { path = "/srv/www" } }
target = { dirname = "/var/backups/files", filename = "www.tar", compress = "zip" }

[[backups]]
name = "database"
source = { type = "mysqldump", options = { databases = "audit" } }
target = { dirname = "dumps", filename = "audit.sql", compress = "/usr/local/bin/bzip2" }
"#
}
