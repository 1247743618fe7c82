//! # Serial Logger
//!
//! A small, embeddable logging facility. Log calls format their message on the
//! calling thread and return immediately; a single worker thread delivers
//! entries, strictly in submission order, to a pluggable [`LogOutput`].
//!
//! ## Features
//!
//! - **Ordered**: one FIFO queue, one consumer, no reordering or drops
//! - **Drainable**: [`Logger::sync`] blocks until everything queued before it is delivered
//! - **Swappable outputs**: replace the active output at any time with [`Logger::setup`]
//! - **Call-site capture**: macros record function, file and line automatically
//!
//! ```
//! use serial_logger::prelude::*;
//! use serial_logger::{info, warning};
//!
//! let logger = Logger::new()?;
//! info!(logger, "Server listening on port {}", 8080)?;
//! warning!(logger, "Cache is cold")?;
//! logger.sync()?;
//! # Ok::<(), serial_logger::LoggerError>(())
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod outputs;

pub mod prelude {
    pub use crate::core::{
        CallSite, LogEntry, LogLevel, LogOutput, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, Result, DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::outputs::{DefaultOutput, FileOutput, MemoryOutput};
}

pub use crate::core::{
    CallSite, LogEntry, LogLevel, LogOutput, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
    Result, DEFAULT_SHUTDOWN_TIMEOUT, DEFAULT_THREAD_NAME,
};
pub use global::{global, log, log_sync, setup, sync};
pub use outputs::{DefaultOutput, FileOutput, MemoryOutput};
