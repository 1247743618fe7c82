//! In-memory output implementation

use crate::core::{CallSite, LogEntry, LogLevel, LogOutput};
use chrono::{DateTime, Local};
use parking_lot::Mutex;

/// Collects delivered entries in memory, in delivery order.
///
/// Useful in tests and for hosts that want to inspect recent log traffic.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured entries
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .map(|entry| entry.message.clone())
            .collect()
    }

    /// Remove and return everything captured so far
    pub fn take(&self) -> Vec<LogEntry> {
        std::mem::take(&mut *self.entries.lock())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl LogOutput for MemoryOutput {
    fn log(
        &self,
        level: LogLevel,
        timestamp: &DateTime<Local>,
        call_site: &CallSite,
        message: &str,
    ) {
        let entry = LogEntry::with_timestamp(level, *timestamp, *call_site, message.to_owned());
        self.entries.lock().push(entry);
    }
}
