//! Console logger with a minimum level

use std::io::Write;

use super::level::{LogLevel, LOG_LEVEL_ENV};
use super::traits::Logger;

/// Writes messages at or above a minimum level to stderr
///
/// Secret scanning runs during application startup, before the host has
/// set up its own logging, so everything goes to stderr and stdout stays
/// free for the application.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Logger printing `INFO` and above with the `[filesecrets]` prefix
    pub fn new() -> Self {
        Self {
            prefix: "[filesecrets]".to_string(),
            min_level: LogLevel::default(),
        }
    }

    /// Minimum level taken from `FILESECRETS_LOG_LEVEL`
    ///
    /// An unset or unparsable value keeps the default.
    pub fn from_env() -> Self {
        let min_level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        Self::new().with_level(min_level)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_level(mut self, min_level: LogLevel) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn format(&self, level: LogLevel, message: &str) -> String {
        format!("{} {}: {}", self.prefix, level, message)
    }

    fn emit(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        // A closed stderr must not abort startup
        let _ = writeln!(std::io::stderr().lock(), "{}", self.format(level, message));
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        self.emit(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.emit(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.emit(LogLevel::Error, message);
    }
}
