//! Run events and the listeners observing them
//!
//! Listeners are registered on a [`RunConfiguration`] as
//! [`Logger::Observer`](crate::config::Logger::Observer) entries and are
//! notified in the order they were added.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::RunConfiguration;

/// Something that happened during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    AppStart { simulate: bool },
    BackupStart { name: String },
    /// Backup excluded by the limit
    BackupSkipped { name: String },
    BackupEnd { name: String },
    Debug { message: String },
    AppEnd,
}

impl Event {
    /// Backup the event refers to, if any
    pub fn backup_name(&self) -> Option<&str> {
        match self {
            Event::BackupStart { name }
            | Event::BackupSkipped { name }
            | Event::BackupEnd { name } => Some(name),
            _ => None,
        }
    }
}

/// Observer of run events
pub trait Listener: Send + Sync {
    /// Name used in log output
    fn name(&self) -> &str;

    fn on_event(&self, event: &Event);
}

/// Listener writing every event to the tracing subscriber
#[derive(Debug, Clone, Default)]
pub struct TracingListener;

impl TracingListener {
    pub fn new() -> Self {
        Self
    }
}

impl Listener for TracingListener {
    fn name(&self) -> &str {
        "tracing"
    }

    fn on_event(&self, event: &Event) {
        match event {
            Event::AppStart { simulate: true } => info!("Starting run (simulation)"),
            Event::AppStart { simulate: false } => info!("Starting run"),
            Event::BackupStart { name } => info!("Backup '{}' started", name),
            Event::BackupSkipped { name } => warn!("Backup '{}' skipped by limit", name),
            Event::BackupEnd { name } => info!("Backup '{}' finished", name),
            Event::Debug { message } => debug!("{}", message),
            Event::AppEnd => info!("Run finished"),
        }
    }
}

/// Fans events out to the listeners of a run configuration
#[derive(Clone, Default)]
pub struct EventDispatcher {
    listeners: Vec<Arc<dyn Listener>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the ready-made listeners of `config`.
    ///
    /// Declared loggers are skipped; the runner builds those itself.
    pub fn from_configuration(config: &RunConfiguration) -> Self {
        Self {
            listeners: config.listeners().cloned().collect(),
        }
    }

    pub fn subscribe(&mut self, listener: Arc<dyn Listener>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn dispatch(&self, event: &Event) {
        for listener in &self.listeners {
            debug!("Notifying listener '{}' of {:?}", listener.name(), event);
            listener.on_event(event);
        }
    }
}

/// A listener that records events for tests
/// Available for use in external test crates
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Recorded notification
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Received {
        pub listener: String,
        pub event: Event,
    }

    /// Listener that appends every event to a shared journal
    #[derive(Clone)]
    pub struct RecordingListener {
        name: String,
        journal: Arc<Mutex<Vec<Received>>>,
    }

    impl RecordingListener {
        pub fn new(name: &str) -> Self {
            Self::with_journal(name, Arc::default())
        }

        /// Share one journal between several listeners to check ordering
        pub fn with_journal(name: &str, journal: Arc<Mutex<Vec<Received>>>) -> Self {
            Self {
                name: name.to_string(),
                journal,
            }
        }

        pub fn journal(&self) -> Arc<Mutex<Vec<Received>>> {
            Arc::clone(&self.journal)
        }

        /// Events this listener received
        pub fn events(&self) -> Vec<Event> {
            self.journal
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.listener == self.name)
                .map(|r| r.event.clone())
                .collect()
        }
    }

    impl Listener for RecordingListener {
        fn name(&self) -> &str {
            &self.name
        }

        fn on_event(&self, event: &Event) {
            self.journal.lock().unwrap().push(Received {
                listener: self.name.clone(),
                event: event.clone(),
            });
        }
    }
}
