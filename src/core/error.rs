//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A message argument's formatting implementation returned an error
    #[error("Failed to format log message")]
    Format(#[from] std::fmt::Error),

    /// The delivery queue is closed
    #[error("Logger already stopped")]
    LoggerStopped,

    /// `sync` called from the worker thread, which would wait on itself
    #[error("sync called from inside a log output")]
    ReentrantSync,

    /// A bounded queue was full when an output logged from the worker thread
    #[error("Log queue full: {capacity} entries buffered")]
    QueueFull { capacity: usize },

    /// The delivery worker could not be started
    #[error("Failed to spawn logger worker thread: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
