//! File-based configuration store (YAML or JSON)

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::Value;

use super::traits::{ConfigResult, ConfigStore};

/// Configuration store backed by a YAML or JSON file
///
/// Nested maps are flattened to dotted keys and sequences to indexed keys, so
///
/// ```yaml
/// secrets:
///   file:
///     base-dir: /var/run/secrets
/// ```
///
/// answers `secrets.file.base-dir`. A missing file is an empty store.
///
/// # Example
///
/// ```no_run
/// use filesecrets_core::config::{ConfigStore, FileConfigStore};
///
/// let config = FileConfigStore::load("/etc/app/application.yaml")?;
/// let base_dir = config.get_property("secrets.file.base-dir");
/// # Ok::<(), filesecrets_core::config::ConfigError>(())
/// ```
pub struct FileConfigStore {
    path: PathBuf,
    properties: RwLock<HashMap<String, String>>,
}

impl FileConfigStore {
    /// Load a config file; `.json` files are parsed as JSON, anything else as YAML
    pub fn load(path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let path = path.into();
        let properties = read_properties(&path)?;
        Ok(Self {
            path,
            properties: RwLock::new(properties),
        })
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the config file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Re-read the file from disk
    pub fn reload(&self) -> ConfigResult<()> {
        let properties = read_properties(&self.path)?;
        let mut guard = self.properties.write().unwrap();
        *guard = properties;
        Ok(())
    }

    /// Number of flattened properties
    pub fn len(&self) -> usize {
        self.properties.read().unwrap().len()
    }

    /// Check if the store holds no properties
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ConfigStore for FileConfigStore {
    fn name(&self) -> &str {
        "file"
    }

    fn get_property(&self, key: &str) -> Option<String> {
        let guard = self.properties.read().unwrap();
        guard.get(key).cloned()
    }
}

impl std::fmt::Debug for FileConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigStore")
            .field("path", &self.path)
            .field("properties", &self.len())
            .finish()
    }
}

fn read_properties(path: &Path) -> ConfigResult<HashMap<String, String>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let document: Value = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    let mut properties = HashMap::new();
    flatten(None, &document, &mut properties);
    Ok(properties)
}

fn flatten(prefix: Option<&str>, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = match prefix {
                    Some(p) => format!("{}.{}", p, key),
                    None => key.clone(),
                };
                flatten(Some(&path), child, out);
            }
        }
        Value::Array(items) => {
            let Some(prefix) = prefix else { return };
            for (i, child) in items.iter().enumerate() {
                flatten(Some(&format!("{}[{}]", prefix, i)), child, out);
            }
        }
        Value::Null => {
            if let Some(p) = prefix {
                out.insert(p.to_string(), String::new());
            }
        }
        Value::String(s) => {
            if let Some(p) = prefix {
                out.insert(p.to_string(), s.clone());
            }
        }
        scalar => {
            if let Some(p) = prefix {
                out.insert(p.to_string(), scalar.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let config = FileConfigStore::load(dir.path().join("absent.yaml")).unwrap();

        assert!(!config.exists());
        assert!(config.is_empty());
        assert_eq!(config.get_property("secrets.file.base-dir"), None);
    }

    #[test]
    fn test_nested_yaml_is_flattened() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("application.yaml");
        fs::write(
            &path,
            "secrets:\n  file:\n    base-dir: /var/run/secrets\n    separator: _\nserver:\n  port: 8080\n  hosts:\n    - a\n    - b\n",
        )
        .unwrap();

        let config = FileConfigStore::load(&path).unwrap();
        assert_eq!(config.get_property("secrets.file.base-dir"), Some("/var/run/secrets".to_string()));
        assert_eq!(config.get_property("secrets.file.separator"), Some("_".to_string()));
        assert_eq!(config.get_property("server.port"), Some("8080".to_string()));
        assert_eq!(config.get_property("server.hosts[1]"), Some("b".to_string()));
        assert_eq!(config.len(), 5);
    }

    #[test]
    fn test_flat_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("application.json");
        fs::write(&path, r#"{"secrets.file.separator": "-", "debug": true}"#).unwrap();

        let config = FileConfigStore::load(&path).unwrap();
        assert_eq!(config.get_property("secrets.file.separator"), Some("-".to_string()));
        assert_eq!(config.get_property("debug"), Some("true".to_string()));
    }

    #[test]
    fn test_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("application.yml");
        fs::write(&path, "a: 1\n").unwrap();

        let config = FileConfigStore::load(&path).unwrap();
        assert_eq!(config.get_property("a"), Some("1".to_string()));

        fs::write(&path, "a: 2\nb: 3\n").unwrap();
        config.reload().unwrap();
        assert_eq!(config.get_property("a"), Some("2".to_string()));
        assert_eq!(config.get_property("b"), Some("3".to_string()));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(FileConfigStore::load(&path), Err(ConfigError::Json(_))));
    }
}
