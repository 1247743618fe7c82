//! Process-wide logger and free-function entry points
//!
//! The global [`Logger`] starts on first use with [`DefaultOutput`] active and
//! lives for the rest of the process. Code that can pass a `Logger` around
//! should prefer an explicit instance.
//!
//! [`DefaultOutput`]: crate::DefaultOutput

use crate::core::{CallSite, LogLevel, LogOutput, Logger, Result};
use std::fmt;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, started on first call.
///
/// # Panics
///
/// If the worker thread cannot be spawned on first use.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(|| match Logger::new() {
        Ok(logger) => logger,
        Err(e) => panic!("failed to start the global logger: {}", e),
    })
}

/// Replace the global logger's active output.
pub fn setup(output: Arc<dyn LogOutput>) {
    global().setup(output);
}

/// Enqueue an entry on the global logger.
///
/// Prefer the macros, which capture the call site:
/// `serial_logger::log!(serial_logger::global(), LogLevel::Info, "...")`.
pub fn log(level: LogLevel, args: fmt::Arguments<'_>, call_site: CallSite) -> Result<()> {
    global().log(level, args, call_site)
}

/// Wait for the global logger to deliver everything queued so far.
pub fn sync() -> Result<()> {
    global().sync()
}

/// Log on the global logger and wait until the entry has been delivered.
pub fn log_sync(level: LogLevel, args: fmt::Arguments<'_>, call_site: CallSite) -> Result<()> {
    global().log_sync(level, args, call_site)
}
