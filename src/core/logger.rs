//! Main logger implementation

use super::{
    call_site::CallSite,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
    log_output::LogOutput,
    metrics::LoggerMetrics,
};
use crate::outputs::DefaultOutput;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};
use parking_lot::RwLock;
use std::fmt::{self, Write as _};
use std::sync::Arc;
use std::thread::{self, ThreadId};
use std::time::Duration;

/// Default shutdown timeout for logger cleanup (5 seconds)
///
/// This timeout is used when the logger is dropped without explicit shutdown.
/// For custom timeout control, use the `shutdown()` method instead.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Name given to the delivery worker thread unless configured otherwise
pub const DEFAULT_THREAD_NAME: &str = "serial-logger";

type SharedOutput = Arc<RwLock<Arc<dyn LogOutput>>>;

/// Work items on the delivery queue.
enum Command {
    Entry(LogEntry),
    /// Acknowledged once every command queued before it has been serviced
    Barrier(Sender<()>),
}

/// Asynchronous logger with a single ordered delivery queue.
///
/// `log` formats the message on the calling thread, stamps it and enqueues it;
/// one worker thread dequeues entries in submission order and hands each to
/// the output that is active at that moment. `sync` enqueues a barrier and
/// blocks until the worker reaches it.
///
/// # Example
///
/// ```
/// use serial_logger::prelude::*;
/// use serial_logger::info;
/// use std::sync::Arc;
///
/// let capture = Arc::new(MemoryOutput::new());
/// let logger = Logger::builder().output(capture.clone()).build()?;
///
/// info!(logger, "Hello, {}!", "world")?;
/// logger.sync()?;
///
/// assert_eq!(capture.messages(), vec!["Hello, world!".to_string()]);
/// # Ok::<(), serial_logger::LoggerError>(())
/// ```
pub struct Logger {
    output: SharedOutput,
    sender: Option<Sender<Command>>,
    worker: Option<thread::JoinHandle<()>>,
    worker_id: ThreadId,
    metrics: Arc<LoggerMetrics>,
    shutdown_timeout: Duration,
}

impl Logger {
    /// Start a logger writing to [`DefaultOutput`] over an unbounded queue.
    pub fn new() -> Result<Self> {
        LoggerBuilder::new().build()
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn start(
        output: Arc<dyn LogOutput>,
        capacity: Option<usize>,
        thread_name: String,
        shutdown_timeout: Duration,
    ) -> Result<Self> {
        let (sender, receiver) = match capacity {
            Some(size) => bounded(size),
            None => unbounded(),
        };
        let output: SharedOutput = Arc::new(RwLock::new(output));
        let output_clone = Arc::clone(&output);
        let metrics = Arc::new(LoggerMetrics::new());
        let metrics_clone = Arc::clone(&metrics);

        let handle = thread::Builder::new()
            .name(thread_name)
            .spawn(move || Self::run_worker(receiver, output_clone, metrics_clone))
            .map_err(LoggerError::WorkerSpawn)?;

        Ok(Self {
            output,
            sender: Some(sender),
            worker_id: handle.thread().id(),
            worker: Some(handle),
            metrics,
            shutdown_timeout,
        })
    }

    /// Worker loop: service commands in queue order until every sender is gone.
    fn run_worker(receiver: Receiver<Command>, output: SharedOutput, metrics: Arc<LoggerMetrics>) {
        while let Ok(command) = receiver.recv() {
            match command {
                Command::Entry(entry) => {
                    // Read the active output per entry so a swap applies to
                    // everything still queued. The lock is not held across the sink call.
                    let active = Arc::clone(&*output.read());
                    Self::deliver(&*active, &entry, &metrics);
                }
                Command::Barrier(done) => {
                    metrics.record_barrier();
                    // The waiter may have gone away; nothing to report then.
                    let _ = done.send(());
                }
            }
        }
    }

    /// Hand one entry to an output with panic isolation.
    ///
    /// A panicking sink loses that entry but never the worker.
    fn deliver(output: &dyn LogOutput, entry: &LogEntry, metrics: &LoggerMetrics) {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            output.log(entry.level, &entry.timestamp, &entry.call_site, &entry.message)
        }));

        if let Err(panic_info) = result {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            eprintln!(
                "[LOGGER CRITICAL] Output panicked while logging {} {}: {}. \
                 Subsequent entries continue to be delivered.",
                entry.level, entry.call_site, panic_msg
            );
            metrics.record_sink_panic();
        }
        metrics.record_delivered();
    }

    /// Replace the active output.
    ///
    /// Takes effect for every entry the worker services afterwards, including
    /// entries that were queued before this call but not yet delivered.
    pub fn setup(&self, output: Arc<dyn LogOutput>) {
        *self.output.write() = output;
    }

    /// The currently active output
    pub fn output(&self) -> Arc<dyn LogOutput> {
        Arc::clone(&*self.output.read())
    }

    /// Format `args` on the calling thread and enqueue the entry.
    ///
    /// Returns once the entry is queued; delivery happens on the worker. A
    /// formatting failure is returned here and nothing is queued. With a
    /// bounded queue this blocks while the queue is full, except on the worker
    /// thread itself, where a full queue returns [`LoggerError::QueueFull`].
    pub fn log(
        &self,
        level: LogLevel,
        args: fmt::Arguments<'_>,
        call_site: CallSite,
    ) -> Result<()> {
        let mut message = String::new();
        message.write_fmt(args)?;

        // Count before sending so the worker never delivers an uncounted entry
        self.metrics.record_enqueued();
        if let Err(e) = self.submit(Command::Entry(LogEntry::new(level, call_site, message))) {
            self.metrics.cancel_enqueued();
            return Err(e);
        }
        Ok(())
    }

    /// Block until every entry queued before this call has been delivered.
    ///
    /// Concurrent callers each wait only for work queued ahead of their own
    /// barrier. Calling this from inside an output (on the worker thread)
    /// would wait on itself and is rejected.
    pub fn sync(&self) -> Result<()> {
        if self.on_worker_thread() {
            return Err(LoggerError::ReentrantSync);
        }

        let (done_tx, done_rx) = bounded(1);
        self.submit(Command::Barrier(done_tx))?;
        done_rx.recv().map_err(|_| LoggerError::LoggerStopped)
    }

    /// `log` followed by `sync`: returns after this entry has been delivered.
    pub fn log_sync(
        &self,
        level: LogLevel,
        args: fmt::Arguments<'_>,
        call_site: CallSite,
    ) -> Result<()> {
        self.log(level, args, call_site)?;
        self.sync()
    }

    fn on_worker_thread(&self) -> bool {
        thread::current().id() == self.worker_id
    }

    fn submit(&self, command: Command) -> Result<()> {
        let sender = self.sender.as_ref().ok_or(LoggerError::LoggerStopped)?;

        // The worker cannot wait for room it would have to make itself
        if self.on_worker_thread() {
            return sender.try_send(command).map_err(|e| match e {
                TrySendError::Full(_) => LoggerError::QueueFull {
                    capacity: sender.capacity().unwrap_or_default(),
                },
                TrySendError::Disconnected(_) => LoggerError::LoggerStopped,
            });
        }
        sender.send(command).map_err(|_| LoggerError::LoggerStopped)
    }

    /// Get the logger metrics
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Gracefully shutdown the logger with a custom timeout
    ///
    /// Closes the queue and waits for the worker to deliver everything already
    /// queued. Afterwards `log` and `sync` return [`LoggerError::LoggerStopped`].
    ///
    /// # Returns
    ///
    /// `true` if the worker finished within `timeout`, `false` otherwise. On
    /// timeout the worker keeps draining in the background. Called on the
    /// worker thread (an output dropping its own logger) it returns at once
    /// and the worker exits after the current entry.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        // Close the channel to signal worker thread
        drop(self.sender.take());

        let Some(handle) = self.worker.take() else {
            return true;
        };

        if self.on_worker_thread() {
            // Detach: a thread cannot wait for itself to finish
            drop(handle);
            return true;
        }

        let start = std::time::Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!("[LOGGER ERROR] Logger worker thread panicked during shutdown: {:?}", e);
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] Logger worker did not finish within {:?}. \
                     {} entries still pending.",
                    timeout,
                    self.metrics.pending()
                );
                return false;
            }

            // Small sleep to avoid busy-waiting
            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let timeout = self.shutdown_timeout;
        self.shutdown(timeout);
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use serial_logger::prelude::*;
/// use std::time::Duration;
///
/// let logger = Logger::builder()
///     .output(DefaultOutput::shared())
///     .bounded(1024)
///     .thread_name("app-logger")
///     .shutdown_timeout(Duration::from_secs(1))
///     .build()?;
/// # Ok::<(), serial_logger::LoggerError>(())
/// ```
pub struct LoggerBuilder {
    output: Option<Arc<dyn LogOutput>>,
    capacity: Option<usize>,
    thread_name: String,
    shutdown_timeout: Duration,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            output: None,
            capacity: None,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
        }
    }

    /// Set the initial output. Defaults to [`DefaultOutput::shared`].
    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, output: Arc<dyn LogOutput>) -> Self {
        self.output = Some(output);
        self
    }

    /// Use a bounded queue of `capacity` entries.
    ///
    /// When full, `log` blocks until the worker makes room. Nothing is ever
    /// dropped. The default queue is unbounded.
    #[must_use = "builder methods return a new value"]
    pub fn bounded(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// How long `Drop` waits for the worker to drain
    #[must_use = "builder methods return a new value"]
    pub fn shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }

    /// Build the Logger and start its worker thread
    pub fn build(self) -> Result<Logger> {
        if self.capacity == Some(0) {
            return Err(LoggerError::config(
                "LoggerBuilder",
                "bounded queue capacity must be at least 1",
            ));
        }

        let output: Arc<dyn LogOutput> = match self.output {
            Some(output) => output,
            None => DefaultOutput::shared(),
        };
        Logger::start(output, self.capacity, self.thread_name, self.shutdown_timeout)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
