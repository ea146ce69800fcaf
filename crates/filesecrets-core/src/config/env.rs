//! Environment variable configuration store

use std::collections::HashMap;
use std::env;

use super::traits::ConfigStore;

/// Environment variable names a dotted property key may be bound to
///
/// Tried in order:
/// - the key as-is (`secrets.file.base-dir`)
/// - upper case, `.` to `_`, `-` removed (`SECRETS_FILE_BASEDIR`)
/// - upper case, `.` and `-` to `_` (`SECRETS_FILE_BASE_DIR`)
pub fn env_var_candidates(key: &str) -> Vec<String> {
    let upper = key.to_ascii_uppercase().replace('.', "_");
    let mut candidates = vec![key.to_string(), upper.replace('-', ""), upper.replace('-', "_")];
    candidates.dedup();
    candidates
}

/// Look up a dotted key in a snapshot of environment variables
pub fn lookup_relaxed(vars: &HashMap<String, String>, key: &str) -> Option<String> {
    env_var_candidates(key)
        .into_iter()
        .find_map(|candidate| vars.get(&candidate).cloned())
}

/// Configuration store backed by environment variables
///
/// Keys are bound loosely so that `secrets.file.base-dir` can be supplied as
/// `SECRETS_FILE_BASEDIR` or `SECRETS_FILE_BASE_DIR` in a container definition.
///
/// # Example
///
/// ```
/// use filesecrets_core::config::{ConfigStore, EnvConfigStore};
///
/// let store = EnvConfigStore::from_vars([("SECRETS_FILE_SEPARATOR", "_")]);
/// assert_eq!(store.get_property("secrets.file.separator"), Some("_".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct EnvConfigStore {
    snapshot: Option<HashMap<String, String>>,
}

impl EnvConfigStore {
    /// Create a store that reads the live process environment
    pub fn new() -> Self {
        Self { snapshot: None }
    }

    /// Create a store over a fixed set of variables
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            snapshot: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }
}

impl ConfigStore for EnvConfigStore {
    fn name(&self) -> &str {
        "env"
    }

    fn get_property(&self, key: &str) -> Option<String> {
        match &self.snapshot {
            Some(vars) => lookup_relaxed(vars, key),
            None => env_var_candidates(key)
                .into_iter()
                .find_map(|candidate| env::var(candidate).ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_candidates() {
        assert_eq!(
            env_var_candidates("secrets.file.base-dir"),
            vec![
                "secrets.file.base-dir".to_string(),
                "SECRETS_FILE_BASEDIR".to_string(),
                "SECRETS_FILE_BASE_DIR".to_string(),
            ]
        );
        assert_eq!(
            env_var_candidates("secrets.file.separator"),
            vec!["secrets.file.separator".to_string(), "SECRETS_FILE_SEPARATOR".to_string()]
        );
    }

    #[test]
    fn test_env_store_snapshot() {
        let store = EnvConfigStore::from_vars([
            ("SECRETS_FILE_BASE_DIR", "/b"),
            ("OTHER", "x"),
        ]);

        assert_eq!(store.name(), "env");
        assert_eq!(store.get_property("secrets.file.base-dir"), Some("/b".to_string()));
        assert_eq!(store.get_property("secrets.file.separator"), None);
    }

    #[test]
    fn test_env_store_prefers_exact_key() {
        let store = EnvConfigStore::from_vars([
            ("secrets.file.base-dir", "/exact"),
            ("SECRETS_FILE_BASEDIR", "/relaxed"),
        ]);

        assert_eq!(store.get_property("secrets.file.base-dir"), Some("/exact".to_string()));
    }

    #[test]
    fn test_env_store_live() {
        // Read-only: any variable already set in the process will do
        let existing = env::vars_os().find_map(|(k, v)| {
            let key = k.into_string().ok()?;
            let value = v.into_string().ok()?;
            (!key.is_empty() && !key.contains('=')).then_some((key, value))
        });

        let store = EnvConfigStore::new();
        if let Some((key, value)) = existing {
            assert_eq!(store.get_property(&key), Some(value));
        }
        assert!(!store.contains_property("filesecrets.test.missing-key"));
    }
}
