//! Ordered chain of property sources

use std::collections::HashMap;

use thiserror::Error;

use crate::config::ConfigStore;

use super::source::PropertySource;

/// Name of the source holding JVM-style system properties in a host chain
pub const SYSTEM_PROPERTIES_SOURCE_NAME: &str = "systemProperties";

/// Name of the source holding the process environment in a host chain
pub const SYSTEM_ENVIRONMENT_SOURCE_NAME: &str = "systemEnvironment";

/// Errors that can occur while rearranging a source chain
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SourceError {
    #[error("Property source does not exist: {0}")]
    NotFound(String),

    #[error("Property source cannot be added relative to itself: {0}")]
    RelativeToItself(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Ordered collection of uniquely named property sources
///
/// Lookups walk the chain front to back and return the first match, so
/// earlier sources shadow later ones. Adding a source whose name is already
/// present moves it to the new position.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use filesecrets_core::config::ConfigStore;
/// use filesecrets_core::sources::{PropertySource, PropertySources};
///
/// let mut sources = PropertySources::new();
/// sources.add_last(PropertySource::from_map("defaults", HashMap::from([("a".into(), "0".into())])));
/// sources.add_first(PropertySource::from_map("overrides", HashMap::from([("a".into(), "1".into())])));
///
/// assert_eq!(sources.get_property("a"), Some("1".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySources {
    sources: Vec<PropertySource>,
}

impl PropertySources {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// The conventional host chain: empty `systemProperties`, then
    /// `systemEnvironment` over the current process environment
    pub fn standard() -> Self {
        let mut sources = Self::new();
        sources.add_last(PropertySource::from_map(SYSTEM_PROPERTIES_SOURCE_NAME, HashMap::new()));
        sources.add_last(PropertySource::from_env(SYSTEM_ENVIRONMENT_SOURCE_NAME));
        sources
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&PropertySource> {
        self.sources.iter().find(|s| s.name() == name)
    }

    /// Add with highest precedence
    pub fn add_first(&mut self, source: PropertySource) {
        self.remove(source.name());
        self.sources.insert(0, source);
    }

    /// Add with lowest precedence
    pub fn add_last(&mut self, source: PropertySource) {
        self.remove(source.name());
        self.sources.push(source);
    }

    /// Add immediately after the source named `relative`
    ///
    /// The chain is unchanged if `relative` does not exist.
    pub fn add_after(&mut self, relative: &str, source: PropertySource) -> SourceResult<()> {
        self.add_relative(relative, source, 1)
    }

    /// Add immediately before the source named `relative`
    pub fn add_before(&mut self, relative: &str, source: PropertySource) -> SourceResult<()> {
        self.add_relative(relative, source, 0)
    }

    /// Swap the source named `name` for `source` at the same position
    pub fn replace(&mut self, name: &str, source: PropertySource) -> SourceResult<()> {
        let index = self
            .position(name)
            .ok_or_else(|| SourceError::NotFound(name.to_string()))?;
        self.sources[index] = source;
        Ok(())
    }

    /// Remove a source by name
    pub fn remove(&mut self, name: &str) -> Option<PropertySource> {
        self.position(name).map(|index| self.sources.remove(index))
    }

    /// Source names in precedence order
    pub fn names(&self) -> Vec<&str> {
        self.sources.iter().map(PropertySource::name).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertySource> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.sources.iter().position(|s| s.name() == name)
    }

    fn add_relative(&mut self, relative: &str, source: PropertySource, offset: usize) -> SourceResult<()> {
        if source.name() == relative {
            return Err(SourceError::RelativeToItself(relative.to_string()));
        }
        if !self.contains(relative) {
            return Err(SourceError::NotFound(relative.to_string()));
        }

        self.remove(source.name());
        // Position is looked up again, the removal may have shifted it
        let index = self.position(relative).unwrap_or(self.sources.len());
        self.sources.insert(index + offset, source);
        Ok(())
    }
}

impl ConfigStore for PropertySources {
    fn name(&self) -> &str {
        "propertySources"
    }

    fn get_property(&self, key: &str) -> Option<String> {
        self.sources.iter().find_map(|s| s.get_property(key))
    }
}

impl<'a> IntoIterator for &'a PropertySources {
    type Item = &'a PropertySource;
    type IntoIter = std::slice::Iter<'a, PropertySource>;

    fn into_iter(self) -> Self::IntoIter {
        self.sources.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SourceValue;

    fn map_source(name: &str, pairs: &[(&str, &str)]) -> PropertySource {
        PropertySource::from_map(
            name,
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        )
    }

    fn chain(names: &[&str]) -> PropertySources {
        let mut sources = PropertySources::new();
        for name in names {
            sources.add_last(map_source(name, &[]));
        }
        sources
    }

    #[test]
    fn test_standard_chain() {
        let sources = PropertySources::standard();

        assert_eq!(sources.names(), vec!["systemProperties", "systemEnvironment"]);
        assert!(matches!(
            sources.get(SYSTEM_ENVIRONMENT_SOURCE_NAME).unwrap().value(),
            SourceValue::Environment(_)
        ));
    }

    #[test]
    fn test_precedence() {
        let mut sources = PropertySources::new();
        sources.add_last(map_source("low", &[("a", "low"), ("b", "low")]));
        sources.add_first(map_source("high", &[("a", "high")]));

        assert_eq!(sources.get_property("a"), Some("high".to_string()));
        assert_eq!(sources.get_property("b"), Some("low".to_string()));
        assert_eq!(sources.get_property("c"), None);
    }

    #[test]
    fn test_add_after_and_before() {
        let mut sources = chain(&["a", "b", "c"]);

        sources.add_after("a", map_source("x", &[])).unwrap();
        assert_eq!(sources.names(), vec!["a", "x", "b", "c"]);

        sources.add_before("a", map_source("y", &[])).unwrap();
        assert_eq!(sources.names(), vec!["y", "a", "x", "b", "c"]);

        sources.add_after("c", map_source("z", &[])).unwrap();
        assert_eq!(sources.names(), vec!["y", "a", "x", "b", "c", "z"]);
    }

    #[test]
    fn test_add_moves_existing() {
        let mut sources = chain(&["a", "b", "c"]);

        sources.add_after("c", map_source("a", &[])).unwrap();
        assert_eq!(sources.names(), vec!["b", "c", "a"]);

        sources.add_first(map_source("c", &[]));
        assert_eq!(sources.names(), vec!["c", "b", "a"]);
        assert_eq!(sources.len(), 3);
    }

    #[test]
    fn test_add_relative_errors_leave_chain_unchanged() {
        let mut sources = chain(&["a", "b"]);
        let before = sources.clone();

        assert_eq!(
            sources.add_after("missing", map_source("b", &[])),
            Err(SourceError::NotFound("missing".to_string()))
        );
        assert_eq!(
            sources.add_after("a", map_source("a", &[])),
            Err(SourceError::RelativeToItself("a".to_string()))
        );
        assert_eq!(sources, before);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut sources = chain(&["a", "b", "c"]);

        sources.replace("b", map_source("b", &[("k", "v")])).unwrap();
        assert_eq!(sources.names(), vec!["a", "b", "c"]);
        assert_eq!(sources.get_property("k"), Some("v".to_string()));

        assert_eq!(
            sources.replace("missing", map_source("missing", &[])),
            Err(SourceError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_remove() {
        let mut sources = chain(&["a", "b"]);

        assert_eq!(sources.remove("a").map(|s| s.name().to_string()), Some("a".to_string()));
        assert!(sources.remove("a").is_none());
        assert_eq!(sources.names(), vec!["b"]);
        assert!(!sources.is_empty());
    }
}
