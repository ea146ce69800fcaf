//! The `secretProperties` source and its merge procedure

use std::collections::HashMap;

use super::chain::{PropertySources, SourceResult, SYSTEM_ENVIRONMENT_SOURCE_NAME};
use super::source::{PropertySource, SourceValue};

/// Property source holding every property read from secret files
pub struct SecretPropertiesSource;

impl SecretPropertiesSource {
    /// Reserved source name
    pub const NAME: &'static str = "secretProperties";

    /// Wrap a map in a source named `secretProperties`
    pub fn create(properties: HashMap<String, String>) -> PropertySource {
        PropertySource::from_map(Self::NAME, properties)
    }

    /// Merge `properties` into the chain's `secretProperties` source
    ///
    /// - Empty `properties`: the chain is not touched.
    /// - Existing source: its map is copied, `properties` laid on top, and the
    ///   result replaces it at the same position. A source without a map
    ///   contributes nothing.
    /// - No source yet: one is added right after `systemEnvironment`, which
    ///   must exist.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use filesecrets_core::config::ConfigStore;
    /// use filesecrets_core::sources::{PropertySources, SecretPropertiesSource};
    ///
    /// let mut sources = PropertySources::standard();
    /// SecretPropertiesSource::merge(HashMap::from([("db.password".into(), "s3cret".into())]), &mut sources)?;
    ///
    /// assert_eq!(sources.names(), vec!["systemProperties", "systemEnvironment", "secretProperties"]);
    /// assert_eq!(sources.get_property("db.password"), Some("s3cret".to_string()));
    /// # Ok::<(), filesecrets_core::sources::SourceError>(())
    /// ```
    pub fn merge(properties: HashMap<String, String>, sources: &mut PropertySources) -> SourceResult<()> {
        if properties.is_empty() {
            return Ok(());
        }

        let mut merged = HashMap::new();
        if let Some(existing) = sources.get(Self::NAME) {
            if let Some(previous) = existing.value().as_map() {
                merged.extend(previous.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            merged.extend(properties);
            sources.replace(Self::NAME, Self::create(merged))
        } else {
            merged.extend(properties);
            sources.add_after(SYSTEM_ENVIRONMENT_SOURCE_NAME, Self::create(merged))
        }
    }

    /// The merged secret properties currently installed in the chain
    pub fn properties(sources: &PropertySources) -> Option<&HashMap<String, String>> {
        sources
            .get(Self::NAME)
            .map(PropertySource::value)
            .and_then(SourceValue::as_map)
    }
}
