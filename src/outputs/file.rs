//! File output implementation

use crate::core::{CallSite, LogLevel, LogOutput, LoggerError, Result};
use crate::outputs::DefaultOutput;
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends entries to a file in the [`DefaultOutput`] layout.
///
/// The file handle is reopened on the next entry after a write fails. An entry
/// that cannot be written is reported on stderr and echoed to the default
/// console output instead of being lost.
pub struct FileOutput {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileOutput {
    /// Open `path` for appending, creating it if needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = Self::open(&path, false)?;
        Ok(Self {
            path,
            file: Mutex::new(Some(file)),
        })
    }

    /// Create `path`, truncating anything already there.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = Self::open(&path, true)?;
        Ok(Self {
            path,
            file: Mutex::new(Some(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(path: &Path, truncate: bool) -> Result<File> {
        let mut options = OpenOptions::new();
        options.create(true);
        if truncate {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }
        options.open(path).map_err(|e| {
            LoggerError::io_operation(
                "opening log file",
                format!("cannot open '{}'", path.display()),
                e,
            )
        })
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let mut guard = self.file.lock();
        let file = match guard.take() {
            Some(file) => file,
            None => Self::open(&self.path, false)?,
        };
        let file = guard.insert(file);

        if let Err(e) = file.write_all(line.as_bytes()) {
            // Drop the handle so the next entry reopens the file
            *guard = None;
            return Err(LoggerError::io_operation(
                "writing log file",
                format!("cannot append to '{}'", self.path.display()),
                e,
            ));
        }
        Ok(())
    }
}

impl LogOutput for FileOutput {
    fn log(
        &self,
        level: LogLevel,
        timestamp: &DateTime<Local>,
        call_site: &CallSite,
        message: &str,
    ) {
        let mut line = DefaultOutput::render(level, timestamp, call_site, message);
        line.push('\n');

        if let Err(e) = self.write_line(&line) {
            eprintln!("[LOGGER WARNING] Failed to write a log: {}", e);
            DefaultOutput::shared().log(level, timestamp, call_site, message);
        }
    }
}
