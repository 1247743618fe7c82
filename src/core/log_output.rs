//! Output trait for log destinations

use super::{call_site::CallSite, log_level::LogLevel};
use chrono::{DateTime, Local};

/// A destination that renders log entries.
///
/// The logger calls `log` from its single worker thread, one entry at a time,
/// in submission order. Implementations therefore need no synchronization for
/// ordering, only for whatever state they share with other threads.
///
/// `log` may block on I/O but should not fail: a sink reports its own errors
/// through a fallback channel (stderr, the default console layout) and
/// returns. The worker catches panics as a last resort, but imposes no
/// timeout on slow sinks.
///
/// # Example
///
/// ```
/// use serial_logger::{CallSite, LogLevel, LogOutput};
/// use chrono::{DateTime, Local};
///
/// struct StderrOutput;
///
/// impl LogOutput for StderrOutput {
///     fn log(&self, level: LogLevel, _: &DateTime<Local>, site: &CallSite, message: &str) {
///         eprintln!("{} {} ({})", level, message, site);
///     }
/// }
/// ```
pub trait LogOutput: Send + Sync {
    /// Log `message`, which occurred at `call_site` at `timestamp`, with `level`.
    ///
    /// - `level`: the severity the caller logged at
    /// - `timestamp`: when `log` was called, not when the entry is delivered
    /// - `call_site`: the function, file and line of the log statement
    /// - `message`: the fully formatted message
    fn log(
        &self,
        level: LogLevel,
        timestamp: &DateTime<Local>,
        call_site: &CallSite,
        message: &str,
    );
}
