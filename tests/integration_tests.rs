//! Integration tests for logger system
//!
//! These tests verify:
//! - Delivery order and drain behaviour
//! - Call-site capture through the public macros
//! - Output swapping
//! - Failing outputs do not stall the worker
//! - File output and graceful shutdown

use chrono::{DateTime, Local};
use serial_logger::prelude::*;
use serial_logger::{info, log, log_at, log_sync};
use std::fs;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn capture_logger() -> (Logger, Arc<MemoryOutput>) {
    let capture = Arc::new(MemoryOutput::new());
    let logger = Logger::builder()
        .output(capture.clone())
        .build()
        .expect("Failed to build logger");
    (logger, capture)
}

/// Writes through a writer that always fails and reports the error on the
/// fallback channel.
struct BrokenOutput {
    failures: AtomicUsize,
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogOutput for BrokenOutput {
    fn log(&self, level: LogLevel, timestamp: &DateTime<Local>, site: &CallSite, message: &str) {
        let line = DefaultOutput::render(level, timestamp, site, message);
        if let Err(e) = writeln!(FailingWriter, "{}", line) {
            self.failures.fetch_add(1, Ordering::SeqCst);
            let err = LoggerError::io_operation("writing log", "device rejected the entry", e);
            eprintln!("[LOGGER WARNING] Failed to write a log: {}", err);
            DefaultOutput::shared().log(level, timestamp, site, message);
        }
    }
}

#[test]
fn test_hello_world() {
    let (logger, capture) = capture_logger();

    log!(logger, LogLevel::Info, "Hello, {}!", "world").expect("log failed");
    let expected_line = line!() - 1;
    logger.sync().expect("sync failed");

    let entries = capture.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, LogLevel::Info);
    assert_eq!(entries[0].message, "Hello, world!");
    assert_eq!(entries[0].call_site.file, file!());
    assert_eq!(entries[0].call_site.line, expected_line);
    assert!(
        entries[0].call_site.function.ends_with("test_hello_world"),
        "unexpected function: {}",
        entries[0].call_site.function
    );
}

#[test]
fn test_all_levels_in_order() {
    let (logger, capture) = capture_logger();

    for level in LogLevel::ALL {
        log!(logger, level, "level {}", level.to_str()).unwrap();
    }
    logger.sync().unwrap();

    let entries = capture.entries();
    let levels: Vec<LogLevel> = entries.iter().map(|e| e.level).collect();
    assert_eq!(levels, LogLevel::ALL.to_vec());

    let tags: Vec<char> = entries.iter().map(|e| e.level.tag()).collect();
    assert_eq!(tags, vec!['V', 'D', 'I', 'W', 'E']);
}

#[test]
fn test_sync_after_k_entries() {
    let (logger, capture) = capture_logger();

    for k in 1..=5 {
        for i in 0..k {
            info!(logger, "round {} entry {}", k, i).unwrap();
        }
        logger.sync().unwrap();
        assert_eq!(capture.take().len(), k);
    }
}

#[test]
fn test_failing_output_then_working_output() {
    let (logger, capture) = capture_logger();
    let broken = Arc::new(BrokenOutput {
        failures: AtomicUsize::new(0),
    });

    logger.setup(broken.clone());
    info!(logger, "goes to the fallback").unwrap();
    logger.sync().unwrap();

    logger.setup(capture.clone());
    info!(logger, "delivered").unwrap();
    logger.sync().unwrap();

    assert_eq!(broken.failures.load(Ordering::SeqCst), 1);
    assert_eq!(capture.messages(), vec!["delivered"]);
}

#[test]
fn test_swap_isolation_after_sync() {
    let first = Arc::new(MemoryOutput::new());
    let second = Arc::new(MemoryOutput::new());
    let logger = Logger::builder().output(first.clone()).build().unwrap();

    for i in 0..50 {
        info!(logger, "early {}", i).unwrap();
    }
    logger.setup(second.clone());
    logger.sync().unwrap();
    for i in 0..50 {
        info!(logger, "late {}", i).unwrap();
    }
    logger.sync().unwrap();

    // Early entries may be split between outputs, but nothing is lost or duplicated
    assert_eq!(first.len() + second.len(), 100);
    assert!(first.messages().iter().all(|m| m.starts_with("early")));

    let late: Vec<String> = second
        .messages()
        .into_iter()
        .filter(|m| m.starts_with("late"))
        .collect();
    let expected: Vec<String> = (0..50).map(|i| format!("late {}", i)).collect();
    assert_eq!(late, expected);
}

#[cfg(target_os = "linux")]
#[test]
fn test_file_output_io_failure_then_working_output() {
    let (logger, capture) = capture_logger();
    let full = FileOutput::new("/dev/full").expect("Failed to open /dev/full");

    logger.setup(Arc::new(full));
    info!(logger, "a").unwrap();
    info!(logger, "b").unwrap();
    logger.sync().unwrap();

    logger.setup(capture.clone());
    info!(logger, "c").unwrap();
    logger.sync().unwrap();

    assert_eq!(capture.messages(), vec!["c"]);
    assert_eq!(logger.metrics().delivered(), 3);
    assert_eq!(logger.metrics().sink_panics(), 0);
}

#[test]
fn test_explicit_call_site_override() {
    let (logger, capture) = capture_logger();
    let site = CallSite::new("bridge::on_message", "bridge.js", 88);

    log_at!(logger, LogLevel::Debug, site, "forwarded").unwrap();
    logger.sync().unwrap();

    assert_eq!(capture.entries()[0].call_site, site);
}

#[test]
fn test_timestamp_taken_at_call_time() {
    let (logger, capture) = capture_logger();

    let before = Local::now();
    info!(logger, "stamped").unwrap();
    let after = Local::now();
    logger.sync().unwrap();

    let timestamp = capture.entries()[0].timestamp;
    assert!(timestamp >= before && timestamp <= after);
}

#[test]
fn test_file_output_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("test.log");

    let output = FileOutput::create(&log_file).expect("Failed to create output");
    let logger = Logger::builder().output(Arc::new(output)).build().unwrap();

    for level in LogLevel::ALL {
        log!(logger, level, "Hello, world!").unwrap();
    }
    logger.sync().unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 10);

    for (pair, level) in lines.chunks(2).zip(LogLevel::ALL) {
        assert!(pair[0].ends_with(&format!(" {} Hello, world! ", level.tag())));
        assert!(pair[1].starts_with("    at "));
        assert!(pair[1].contains("test_file_output_end_to_end in "));
    }
}

#[test]
fn test_log_sync_flushes_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("sync.log");

    let output = FileOutput::new(&log_file).expect("Failed to create output");
    let logger = Logger::builder().output(Arc::new(output)).build().unwrap();

    log_sync!(logger, LogLevel::Error, "about to exit").unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.contains(" E about to exit "));
}

#[test]
fn test_graceful_shutdown() {
    let (logger, capture) = capture_logger();

    {
        let logger = logger;
        for i in 0..10 {
            info!(logger, "Message {}", i).unwrap();
        }
        // Logger drops here - should drain before the worker exits
    }

    assert_eq!(capture.len(), 10);
}

#[test]
fn test_explicit_shutdown_timeout() {
    let (mut logger, capture) = capture_logger();
    for i in 0..10 {
        info!(logger, "Message {}", i).unwrap();
    }

    assert!(logger.shutdown(Duration::from_secs(5)));
    assert_eq!(capture.len(), 10);
    assert!(matches!(logger.sync(), Err(LoggerError::LoggerStopped)));
}
