//! Standard output implementation

use crate::core::{CallSite, LogLevel, LogOutput};
use chrono::{DateTime, Local};
use std::io::{self, Write};
use std::sync::{Arc, OnceLock};

static SHARED: OnceLock<Arc<DefaultOutput>> = OnceLock::new();

/// Writes entries to standard output in the default layout:
///
/// ```text
/// 2024-05-01 12:00:00.123 I Hello, world! 
///     at app::main in src/main.rs:10
/// ```
///
/// Stateless. A single shared instance is used as the initial output of every
/// logger; obtain it with [`DefaultOutput::shared`].
#[derive(Debug)]
pub struct DefaultOutput {
    _private: (),
}

impl DefaultOutput {
    /// `yyyy-MM-dd HH:mm:ss.SSS` in local time
    pub const TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S%.3f";

    pub fn shared() -> Arc<DefaultOutput> {
        Arc::clone(SHARED.get_or_init(|| Arc::new(DefaultOutput { _private: () })))
    }

    /// Render one entry in the default layout, without a trailing newline.
    ///
    /// Custom outputs can reuse this to stay compatible with anything parsing
    /// the console format.
    pub fn render(
        level: LogLevel,
        timestamp: &DateTime<Local>,
        call_site: &CallSite,
        message: &str,
    ) -> String {
        format!(
            "{} {} {} \n    {}",
            timestamp.format(Self::TIMESTAMP_FORMAT),
            level,
            message,
            call_site
        )
    }

    fn write_to<W: Write>(
        out: &mut W,
        level: LogLevel,
        timestamp: &DateTime<Local>,
        call_site: &CallSite,
        message: &str,
    ) -> io::Result<()> {
        writeln!(out, "{}", Self::render(level, timestamp, call_site, message))?;
        out.flush()
    }
}

impl LogOutput for DefaultOutput {
    fn log(
        &self,
        level: LogLevel,
        timestamp: &DateTime<Local>,
        call_site: &CallSite,
        message: &str,
    ) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = Self::write_to(&mut stdout, level, timestamp, call_site, message) {
            eprintln!("[LOGGER ERROR] Failed to write log to stdout: {}", e);
        }
    }
}
