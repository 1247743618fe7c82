//! Log entry structure

use super::call_site::CallSite;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::Serialize;

/// The unit of work handed to the delivery worker.
///
/// The message is already formatted; nothing about an entry is computed on
/// the worker thread.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub timestamp: DateTime<Local>,
    pub call_site: CallSite,
    pub message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current local time.
    pub fn new(level: LogLevel, call_site: CallSite, message: String) -> Self {
        Self::with_timestamp(level, Local::now(), call_site, message)
    }

    pub fn with_timestamp(
        level: LogLevel,
        timestamp: DateTime<Local>,
        call_site: CallSite,
        message: String,
    ) -> Self {
        Self {
            level,
            timestamp,
            call_site,
            message,
        }
    }
}
