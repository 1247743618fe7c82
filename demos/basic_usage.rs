//! Basic logger usage example
//!
//! Demonstrates logging at every level to the default console output.
//!
//! Run with: cargo run --example basic_usage

use serial_logger::prelude::*;
use serial_logger::{debug, error, info, log_at, verbose, warning};

fn main() -> Result<()> {
    println!("=== Serial Logger - Basic Usage Example ===\n");

    let logger = Logger::new()?;

    println!("1. Logging at different levels:");
    verbose!(logger, "This is a verbose message")?;
    debug!(logger, "This is a debug message")?;
    info!(logger, "This is an info message")?;
    warning!(logger, "This is a warning message")?;
    error!(logger, "This is an error message")?;
    logger.sync()?;

    println!("\n2. Overriding the call site:");
    let site = CallSite::new("script::on_load", "plugin.lua", 17);
    log_at!(logger, LogLevel::Info, site, "Reported on behalf of a script")?;
    logger.sync()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
