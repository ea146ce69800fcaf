//! Configuration store trait

/// Read-only key/value configuration lookup
///
/// This is the host configuration the index builder reads its own settings
/// from (`secrets.file.base-dir`, `secrets.file.separator`).
///
/// Implementations:
/// - `MemoryConfigStore`: In-memory map
/// - `EnvConfigStore`: Environment variables with relaxed key binding
/// - `FileConfigStore`: YAML or JSON file
/// - `PropertySources`: The full source chain, honoring precedence
pub trait ConfigStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Look up a property by its dotted key
    fn get_property(&self, key: &str) -> Option<String>;

    /// Check if a property is defined
    fn contains_property(&self, key: &str) -> bool {
        self.get_property(key).is_some()
    }
}

/// Errors that can occur while reading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid separator {0:?}: expected a single character")]
    InvalidSeparator(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
