//! Logger metrics for observability
//!
//! Counters for the delivery queue: how much was submitted, how much reached
//! the active output, and how often a sink panicked.

use std::sync::atomic::{AtomicU64, Ordering};

/// Delivery counters for a [`Logger`](crate::Logger).
///
/// # Example
///
/// ```
/// use serial_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_enqueued();
/// metrics.record_delivered();
///
/// assert_eq!(metrics.enqueued(), 1);
/// assert_eq!(metrics.pending(), 0);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries accepted by `log`
    enqueued: AtomicU64,

    /// Entries handed to an output by the worker
    delivered: AtomicU64,

    /// Output invocations that panicked
    sink_panics: AtomicU64,

    /// Barriers processed by the worker
    barriers: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            enqueued: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            sink_panics: AtomicU64::new(0),
            barriers: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_panics(&self) -> u64 {
        self.sink_panics.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn barriers(&self) -> u64 {
        self.barriers.load(Ordering::Relaxed)
    }

    /// Entries submitted but not yet handed to an output
    pub fn pending(&self) -> u64 {
        self.enqueued().saturating_sub(self.delivered())
    }

    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.enqueued.fetch_add(1, Ordering::Relaxed)
    }

    /// Undo `record_enqueued` for an entry the queue refused
    #[inline]
    pub fn cancel_enqueued(&self) -> u64 {
        self.enqueued.fetch_sub(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_panic(&self) -> u64 {
        self.sink_panics.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_barrier(&self) -> u64 {
        self.barriers.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            enqueued: AtomicU64::new(self.enqueued()),
            delivered: AtomicU64::new(self.delivered()),
            sink_panics: AtomicU64::new(self.sink_panics()),
            barriers: AtomicU64::new(self.barriers()),
        }
    }
}
