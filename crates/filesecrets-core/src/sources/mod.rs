//! Property Merger
//!
//! An ordered chain of named property sources, and the procedure that
//! installs secret properties into it without losing earlier merges.

mod source;
mod chain;
mod secret;

pub use source::{PropertySource, SourceValue};
pub use chain::{
    PropertySources, SourceError, SourceResult,
    SYSTEM_ENVIRONMENT_SOURCE_NAME, SYSTEM_PROPERTIES_SOURCE_NAME,
};
pub use secret::SecretPropertiesSource;
