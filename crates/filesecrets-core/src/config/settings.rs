//! Settings for locating and interpreting the secrets directory

use std::path::PathBuf;

use super::traits::{ConfigError, ConfigResult, ConfigStore};

/// Property holding the secrets directory
pub const BASE_DIR_PROPERTY: &str = "secrets.file.base-dir";

/// Property holding the hierarchy separator used in filenames
pub const SEPARATOR_PROPERTY: &str = "secrets.file.separator";

/// Docker's default mount point for secrets
pub const DEFAULT_BASE_DIR: &str = "/run/secrets";

/// Canonical property key separator
pub const DEFAULT_SEPARATOR: char = '.';

/// Where secret files live and how their names map to property keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretsSettings {
    pub base_dir: PathBuf,
    pub separator: char,
}

impl Default for SecretsSettings {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl SecretsSettings {
    pub fn new(base_dir: impl Into<PathBuf>, separator: char) -> Self {
        Self {
            base_dir: base_dir.into(),
            separator,
        }
    }

    /// Read both settings from a config store, falling back to the defaults
    ///
    /// An empty separator counts as unset. A separator longer than one
    /// character is rejected.
    pub fn resolve(config: &dyn ConfigStore) -> ConfigResult<Self> {
        let base_dir = config
            .get_property(BASE_DIR_PROPERTY)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR));

        let separator = match config.get_property(SEPARATOR_PROPERTY) {
            None => DEFAULT_SEPARATOR,
            Some(raw) => parse_separator(&raw)?,
        };

        Ok(Self { base_dir, separator })
    }

    /// Whether filenames use the canonical `.` separator
    pub fn is_default_separator(&self) -> bool {
        self.separator == DEFAULT_SEPARATOR
    }
}

fn parse_separator(raw: &str) -> ConfigResult<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(DEFAULT_SEPARATOR),
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidSeparator(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigStore;

    #[test]
    fn test_defaults() {
        let settings = SecretsSettings::resolve(&MemoryConfigStore::new()).unwrap();

        assert_eq!(settings, SecretsSettings::default());
        assert_eq!(settings.base_dir, PathBuf::from("/run/secrets"));
        assert!(settings.is_default_separator());
    }

    #[test]
    fn test_configured_values() {
        let config = MemoryConfigStore::new();
        config.set(BASE_DIR_PROPERTY, "/var/secrets");
        config.set(SEPARATOR_PROPERTY, "_");

        let settings = SecretsSettings::resolve(&config).unwrap();
        assert_eq!(settings, SecretsSettings::new("/var/secrets", '_'));
        assert!(!settings.is_default_separator());
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = MemoryConfigStore::new();
        config.set(BASE_DIR_PROPERTY, "");
        config.set(SEPARATOR_PROPERTY, "");

        assert_eq!(SecretsSettings::resolve(&config).unwrap(), SecretsSettings::default());
    }

    #[test]
    fn test_multi_char_separator_rejected() {
        let config = MemoryConfigStore::new();
        config.set(SEPARATOR_PROPERTY, "__");

        assert!(matches!(
            SecretsSettings::resolve(&config),
            Err(ConfigError::InvalidSeparator(s)) if s == "__"
        ));
    }
}
