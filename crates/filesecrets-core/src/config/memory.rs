//! In-memory configuration store

use std::collections::HashMap;
use std::sync::RwLock;

use super::traits::ConfigStore;

/// In-memory configuration store
///
/// # Example
///
/// ```
/// use filesecrets_core::config::{ConfigStore, MemoryConfigStore};
///
/// let config = MemoryConfigStore::new();
/// config.set("secrets.file.separator", "_");
/// assert_eq!(config.get_property("secrets.file.separator"), Some("_".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    properties: RwLock<HashMap<String, String>>,
}

impl MemoryConfigStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            properties: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store with initial properties
    pub fn with_properties(properties: HashMap<String, String>) -> Self {
        Self {
            properties: RwLock::new(properties),
        }
    }

    /// Set a property
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut guard = self.properties.write().unwrap();
        guard.insert(key.into(), value.into());
    }

    /// Remove a property, returning the previous value
    pub fn remove(&self, key: &str) -> Option<String> {
        let mut guard = self.properties.write().unwrap();
        guard.remove(key)
    }

    /// Clear all properties
    pub fn clear(&self) {
        let mut guard = self.properties.write().unwrap();
        guard.clear();
    }
}

impl ConfigStore for MemoryConfigStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get_property(&self, key: &str) -> Option<String> {
        let guard = self.properties.read().unwrap();
        guard.get(key).cloned()
    }
}
