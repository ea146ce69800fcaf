//! filesecrets core
//!
//! Exposes secrets mounted as one file per value (the Docker/Kubernetes
//! `/run/secrets` convention) as configuration properties.
//!
//! - `index`: scan the secrets directory into `{property key -> file URI}`
//! - `reader`: resolve a location to the secret's content
//! - `sources`: the property source chain and the `secretProperties` merge
//! - `loader`: all of the above against a chain, in one call
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use filesecrets_core::{ConfigStore, ConsoleLogger, LogLevel, PropertySources, SecretsLoader};
//!
//! let mut sources = PropertySources::standard();
//! let logger = ConsoleLogger::new().with_level(LogLevel::Warn);
//! SecretsLoader::new(Arc::new(logger)).load(&mut sources)?;
//!
//! let password = sources.get_property("spring.datasource.password");
//! # Ok::<(), filesecrets_core::Error>(())
//! ```

pub mod logging;
pub mod config;
pub mod index;
pub mod reader;
pub mod sources;
pub mod loader;
mod error;

pub use error::{Error, Result};

pub use logging::{Logger, SharedLogger, LogLevel, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use config::{
    ConfigStore, ConfigError, ConfigResult,
    MemoryConfigStore, EnvConfigStore, FileConfigStore, SecretsSettings,
};

pub use index::{FilenameIndexBuilder, PropertyIndex, PropertyIndexSupplier, IndexError};

pub use reader::{SecretReader, FileSecretReader, ReaderError};

pub use sources::{PropertySource, PropertySources, SourceValue, SecretPropertiesSource, SourceError};

pub use loader::SecretsLoader;
