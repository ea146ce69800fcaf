//! Logging abstractions
//!
//! The crate never installs a global logger; callers pass a `SharedLogger`
//! to the components that emit warnings.

mod traits;
mod level;
mod noop;
mod console;
mod memory;

pub use traits::{Logger, SharedLogger};
pub use level::{LogLevel, ParseLogLevelError, LOG_LEVEL_ENV};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use memory::MemoryLogger;
