//! Plan manager - works out what a run would do

use serde::Serialize;
use tracing::info;

use crate::config::{BackupDefinition, RunConfiguration, WorkingDirectory};
use crate::managers::events::{Event, EventDispatcher};

/// How the runner has to produce the compressed file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionStrategy {
    /// Dump output is piped straight through the compressor
    Pipe,
    /// Dump to a temporary file, compress afterwards
    TempFile,
}

/// One backup of the plan as the runner would see it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedBackup {
    pub name: String,
    pub active: bool,
    pub stop_on_failure: bool,
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<CompressionStrategy>,
}

impl PlannedBackup {
    fn new(backup: &BackupDefinition, active: bool, working_dir: &WorkingDirectory) -> Self {
        let compression = backup.target.compression.as_ref();

        Self {
            name: backup.name.clone(),
            active,
            stop_on_failure: backup.stop_on_failure,
            source: backup.source.source_type.clone(),
            target: backup.target.path_name(working_dir).display().to_string(),
            compressor: compression.map(|c| c.binary().display().to_string()),
            mime_type: compression.map(|c| c.mime_type().to_string()),
            strategy: compression.map(|c| {
                if c.is_pipeable() {
                    CompressionStrategy::Pipe
                } else {
                    CompressionStrategy::TempFile
                }
            }),
        }
    }
}

pub struct PlanManager<'a> {
    config: &'a RunConfiguration,
    dispatcher: EventDispatcher,
}

impl<'a> PlanManager<'a> {
    pub fn new(config: &'a RunConfiguration) -> Self {
        Self {
            config,
            dispatcher: EventDispatcher::from_configuration(config),
        }
    }

    /// Walk all backups, notifying listeners about skipped ones
    pub fn plan(&self) -> Vec<PlannedBackup> {
        let working_dir = self.config.working_directory();

        self.dispatcher.dispatch(&Event::AppStart {
            simulate: self.config.is_simulation(),
        });

        let planned: Vec<_> = self
            .config
            .backups()
            .iter()
            .map(|backup| {
                let active = self.config.is_backup_active(&backup.name);
                let entry = PlannedBackup::new(backup, active, &working_dir);
                if active {
                    self.dispatcher.dispatch(&Event::Debug {
                        message: format!("Backup '{}' writes {}", entry.name, entry.target),
                    });
                } else {
                    self.dispatcher.dispatch(&Event::BackupSkipped {
                        name: backup.name.clone(),
                    });
                }
                entry
            })
            .collect();

        self.dispatcher.dispatch(&Event::AppEnd);

        info!(
            "{} of {} backup(s) active",
            planned.iter().filter(|p| p.active).count(),
            planned.len()
        );
        planned
    }
}
