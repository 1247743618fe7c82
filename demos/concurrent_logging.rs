//! Concurrent logging example
//!
//! Demonstrates many threads sharing one logger and a final drain.
//!
//! Run with: cargo run --example concurrent_logging

use serial_logger::prelude::*;
use serial_logger::info;
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    println!("=== Serial Logger - Concurrent Logging Example ===\n");

    let logger = Arc::new(Logger::builder().bounded(256).thread_name("demo-logger").build()?);

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || -> Result<()> {
                for task in 0..5 {
                    info!(logger, "worker {} finished task {}", worker, task)?;
                }
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        match handle.join() {
            Ok(result) => result?,
            Err(_) => eprintln!("worker thread panicked"),
        }
    }

    logger.sync()?;

    let metrics = logger.metrics();
    println!(
        "\nEnqueued: {}, delivered: {}, sink panics: {}",
        metrics.enqueued(),
        metrics.delivered(),
        metrics.sink_panics()
    );

    Ok(())
}
