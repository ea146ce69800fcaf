//! Logger trait and formatting macros

use std::sync::Arc;

/// Sink for the messages emitted while scanning and merging secrets
///
/// The index builder warns about ambiguous, duplicate and non-UTF-8 files;
/// the loader reports how many properties it contributed. Nothing is logged
/// through a global facade, so each component receives its logger.
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Logger shared between the builder and the loader
pub type SharedLogger = Arc<dyn Logger>;

/// `log_debug!(logger, "Scanning {}", dir)`
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&format!($($arg)*))
    };
}
