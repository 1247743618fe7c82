//! Logging macros for ergonomic log message formatting.
//!
//! Every macro takes the logger first, formats like `format!`, captures the
//! call site of the invocation and evaluates to [`Result<()>`](crate::Result),
//! the same way `write!` returns `fmt::Result`.
//!
//! # Examples
//!
//! ```
//! use serial_logger::prelude::*;
//! use serial_logger::{info, log, log_sync};
//!
//! let logger = Logger::new()?;
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! log!(logger, LogLevel::Info, "Server listening on port {}", port)?;
//!
//! // The process-wide logger works the same way
//! info!(serial_logger::global(), "Using the global logger")?;
//!
//! // Block until the entry has been delivered
//! log_sync!(logger, LogLevel::Error, "Shutting down")?;
//! # Ok::<(), serial_logger::LoggerError>(())
//! ```

/// Log a message at `level`, capturing the call site.
///
/// # Examples
///
/// ```
/// # use serial_logger::prelude::*;
/// # let logger = Logger::new()?;
/// use serial_logger::log;
/// log!(logger, LogLevel::Info, "Simple message")?;
/// log!(logger, LogLevel::Error, "Error code: {}", 500)?;
/// # Ok::<(), serial_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+), $crate::call_site!())
    };
}

/// Log with an explicit [`CallSite`](crate::CallSite) instead of the captured one.
///
/// # Examples
///
/// ```
/// # use serial_logger::prelude::*;
/// # let logger = Logger::new()?;
/// use serial_logger::log_at;
/// let site = CallSite::new("plugin::load", "plugin.lua", 12);
/// log_at!(logger, LogLevel::Warning, site, "Deprecated call")?;
/// # Ok::<(), serial_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $call_site:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+), $call_site)
    };
}

/// Log and block until the entry has been delivered.
///
/// Use before an abrupt exit so the last words are not left in the queue.
#[macro_export]
macro_rules! log_sync {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_sync($level, format_args!($($arg)+), $crate::call_site!())
    };
}

/// Log a verbose-level message.
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Verbose, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use serial_logger::prelude::*;
/// # let logger = Logger::new()?;
/// use serial_logger::debug;
/// debug!(logger, "Counter value: {}", 10)?;
/// # Ok::<(), serial_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use serial_logger::prelude::*;
/// # let logger = Logger::new()?;
/// use serial_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error")?;
/// # Ok::<(), serial_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
