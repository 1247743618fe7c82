//! Core logger types and traits

pub mod call_site;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod log_output;
pub mod logger;
pub mod metrics;

pub use call_site::CallSite;
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use log_output::LogOutput;
pub use logger::{Logger, LoggerBuilder, DEFAULT_SHUTDOWN_TIMEOUT, DEFAULT_THREAD_NAME};
pub use metrics::LoggerMetrics;
