//! Configuration stores
//!
//! Supports multiple configuration sources:
//! - `MemoryConfigStore`: In-memory
//! - `EnvConfigStore`: Environment variables
//! - `FileConfigStore`: YAML/JSON file
//!
//! `SecretsSettings` reads the secrets directory settings from any of them.

mod traits;
mod memory;
mod env;
mod file;
mod settings;

pub use traits::{ConfigStore, ConfigError, ConfigResult};
pub use memory::MemoryConfigStore;
pub use env::{EnvConfigStore, env_var_candidates, lookup_relaxed};
pub use file::FileConfigStore;
pub use settings::{
    SecretsSettings, BASE_DIR_PROPERTY, SEPARATOR_PROPERTY, DEFAULT_BASE_DIR, DEFAULT_SEPARATOR,
};
