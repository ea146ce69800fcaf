//! Recording logger

use std::sync::RwLock;

use super::level::LogLevel;
use super::traits::Logger;

/// A logger that keeps every message in memory
///
/// Useful in tests that need to assert a warning was emitted, and for hosts
/// that want to replay startup messages once their own logging is configured.
///
/// # Example
///
/// ```
/// use filesecrets_core::logging::{Logger, MemoryLogger};
///
/// let logger = MemoryLogger::new();
/// logger.warn("duplicate secret");
/// assert_eq!(logger.warnings(), vec!["duplicate secret".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: RwLock<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    /// Create a new empty recording logger
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// All recorded messages in emission order
    pub fn records(&self) -> Vec<(LogLevel, String)> {
        let records = self.records.read().unwrap();
        records.clone()
    }

    /// Messages recorded at the given level
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        let records = self.records.read().unwrap();
        records
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Shorthand for `messages(LogLevel::Warn)`
    pub fn warnings(&self) -> Vec<String> {
        self.messages(LogLevel::Warn)
    }

    /// Forward every recorded message to another logger, then clear
    pub fn replay(&self, target: &dyn Logger) {
        let mut records = self.records.write().unwrap();
        for (level, message) in records.drain(..) {
            match level {
                LogLevel::Debug => target.debug(&message),
                LogLevel::Info => target.info(&message),
                LogLevel::Warn => target.warn(&message),
                LogLevel::Error => target.error(&message),
            }
        }
    }

    /// Drop all recorded messages
    pub fn clear(&self) {
        let mut records = self.records.write().unwrap();
        records.clear();
    }

    fn record(&self, level: LogLevel, message: &str) {
        let mut records = self.records.write().unwrap();
        records.push((level, message.to_string()));
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.record(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.record(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_records_in_order() {
        let logger = MemoryLogger::new();
        logger.info("first");
        logger.warn("second");
        crate::log_warn!(logger, "third {}", 3);

        assert_eq!(
            logger.records(),
            vec![
                (LogLevel::Info, "first".to_string()),
                (LogLevel::Warn, "second".to_string()),
                (LogLevel::Warn, "third 3".to_string()),
            ]
        );
        assert_eq!(logger.warnings().len(), 2);
        assert!(logger.messages(LogLevel::Error).is_empty());
    }

    #[test]
    fn test_memory_logger_macros() {
        let logger = MemoryLogger::new();
        crate::log_warn!(logger, "skipping {}", "a.b");
        crate::log_debug!(logger, "scan {}", "/run/secrets");

        assert_eq!(logger.warnings(), vec!["skipping a.b".to_string()]);
        assert_eq!(logger.messages(LogLevel::Debug), vec!["scan /run/secrets".to_string()]);
    }

    #[test]
    fn test_memory_logger_replay() {
        let source = MemoryLogger::new();
        source.warn("w");
        source.error("e");

        let target = MemoryLogger::new();
        source.replay(&target);

        assert!(source.records().is_empty());
        assert_eq!(target.records().len(), 2);
        assert_eq!(target.messages(LogLevel::Error), vec!["e".to_string()]);
    }
}
