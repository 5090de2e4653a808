//! Logger utility for application-wide logging
//!
//! This module provides a file-backed logger that works alongside the
//! standard log crate. Commands also use it directly to record a summary of
//! what they did.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output, `None` when file logging is off
    file: Mutex<Option<File>>,
    /// Most verbose level this logger records
    level: Level,
}

impl Logger {
    /// Creates a new logger writing to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file (created or truncated)
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &Path) -> io::Result<Self> {
        let file = File::create(log_file)?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: Level::Info,
        })
    }

    /// Creates a logger that discards summary lines
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
            level: Level::Info,
        }
    }

    /// Set the most verbose level recorded through the `log` facade
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;

        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs the outcome of a batch in a fixed format
    ///
    /// # Arguments
    ///
    /// * `operation` - Name of the batch operation
    /// * `succeeded` - Number of items handled successfully
    /// * `failed` - Paths or URLs of the items that were not
    pub fn log_batch_summary(&self, operation: &str, succeeded: usize, failed: &[String]) -> io::Result<()> {
        self.log(&format!("{}: {} succeeded, {} failed", operation, succeeded, failed.len()))?;
        for item in failed {
            self.log(&format!("  failed: {}", item))?;
        }
        Ok(())
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(log_file: &Path, level: Level) -> io::Result<()> {
        // Create a dedicated logger for the log crate
        let global_logger = Logger::new(log_file)?.with_level(level);

        // Only called once at startup, so a second registration is just reported
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level.to_level_filter());
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}: {}", record.level(), record.target(), record.args());
            let _ = Logger::log(self, &message);

            // stdout is reserved for command output
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
