//! File logging example
//!
//! Demonstrates switching the active output from the console to a file.
//!
//! Run with: cargo run --example file_logging

use serial_logger::prelude::*;
use serial_logger::{error, info, log_sync, warning};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Serial Logger - File Logging Example ===\n");

    let logger = Logger::new()?;
    info!(logger, "Application started on the console")?;
    logger.sync()?;

    println!("1. Switching output to 'application.log'");
    logger.setup(Arc::new(FileOutput::create("application.log")?));

    for i in 1..=5 {
        info!(logger, "Processing item {}/5", i)?;
        if i == 3 {
            warning!(logger, "Item 3 took longer than expected")?;
        }
    }
    error!(logger, "Failed to load optional plugin")?;

    // Make sure the last entry is on disk before exiting
    log_sync!(logger, LogLevel::Info, "All operations completed")?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
