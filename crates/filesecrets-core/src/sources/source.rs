//! Named property sources

use std::collections::HashMap;
use std::ffi::OsString;

use crate::config::lookup_relaxed;

/// Storage behind a property source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceValue {
    /// Plain key/value map with exact key lookup
    Map(HashMap<String, String>),
    /// Snapshot of environment variables, looked up with relaxed key binding
    Environment(HashMap<String, String>),
    /// Storage that is not a key/value map; answers no lookups
    Opaque(String),
}

impl SourceValue {
    /// The underlying map, if this source has one
    pub fn as_map(&self) -> Option<&HashMap<String, String>> {
        match self {
            SourceValue::Map(map) | SourceValue::Environment(map) => Some(map),
            SourceValue::Opaque(_) => None,
        }
    }
}

/// A named container for configuration properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySource {
    name: String,
    value: SourceValue,
}

impl PropertySource {
    pub fn new(name: impl Into<String>, value: SourceValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Source backed by a plain map
    pub fn from_map(name: impl Into<String>, map: HashMap<String, String>) -> Self {
        Self::new(name, SourceValue::Map(map))
    }

    /// Source over a snapshot of the current process environment
    ///
    /// Variables whose name or value is not valid UTF-8 are left out.
    pub fn from_env(name: impl Into<String>) -> Self {
        Self::new(name, SourceValue::Environment(utf8_vars(std::env::vars_os())))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &SourceValue {
        &self.value
    }

    /// Look up a single property in this source only
    pub fn get_property(&self, key: &str) -> Option<String> {
        match &self.value {
            SourceValue::Map(map) => map.get(key).cloned(),
            SourceValue::Environment(vars) => lookup_relaxed(vars, key),
            SourceValue::Opaque(_) => None,
        }
    }
}

fn utf8_vars<I>(vars: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
