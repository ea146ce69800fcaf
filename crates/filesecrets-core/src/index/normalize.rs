//! Filename to property key rules
//!
//! Everything in here is pure string handling so it can be tested without
//! touching the filesystem.

use std::collections::hash_map::{self, Entry};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::DEFAULT_SEPARATOR;
use crate::logging::Logger;

/// Whether `filename` contains `.` anywhere but its first character
///
/// A leading dot marks a hidden file and does not count.
pub fn contains_default_separator(filename: &str) -> bool {
    filename.rfind(DEFAULT_SEPARATOR).is_some_and(|i| i > 0)
}

/// Whether `filename` would be ambiguous under `separator`
///
/// With a custom separator, a name that also contains `.` could collide with
/// a name using the separator, since both end up as `.` in the key. With the
/// default separator nothing is ambiguous.
pub fn is_ambiguous(filename: &str, separator: char) -> bool {
    separator != DEFAULT_SEPARATOR && contains_default_separator(filename)
}

/// Convert a filename into its property key
///
/// Every `separator` becomes `.`, then the result is lower-cased without
/// regard to locale. Other characters are left alone.
pub fn to_property_key(filename: &str, separator: char) -> String {
    let replaced: String = filename
        .chars()
        .map(|c| if c == separator { DEFAULT_SEPARATOR } else { c })
        .collect();
    replaced.to_lowercase()
}

/// One qualifying file seen during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretEntry {
    pub filename: String,
    pub key: String,
    pub location: String,
}

impl SecretEntry {
    pub fn new(filename: impl Into<String>, separator: char, location: impl Into<String>) -> Self {
        let filename = filename.into();
        let key = to_property_key(&filename, separator);
        Self {
            filename,
            key,
            location: location.into(),
        }
    }
}

/// A regular file found in the secrets directory, before any filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Name within the directory
    pub filename: String,
    /// Absolute filesystem path
    pub path: PathBuf,
    /// `file://` URI of `path`
    pub location: String,
}

/// Mapping from normalized property key to the location of its secret file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyIndex {
    entries: HashMap<String, String>,
}

impl PropertyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the key is taken
    ///
    /// On collision the index is unchanged and the location already stored
    /// is returned as the error.
    pub fn insert_first_wins(&mut self, key: String, location: String) -> Result<(), &str> {
        match self.entries.entry(key) {
            Entry::Occupied(existing) => Err(existing.into_mut().as_str()),
            Entry::Vacant(slot) => {
                slot.insert(location);
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.entries
    }
}

impl IntoIterator for PropertyIndex {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertyIndex {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Apply the ambiguity filter, normalization and first-wins collision policy
///
/// `files` are taken in discovery order. Skipped and dropped files are
/// reported through `logger`.
pub fn collect_index<I>(files: I, separator: char, logger: &dyn Logger) -> PropertyIndex
where
    I: IntoIterator<Item = ScannedFile>,
{
    let mut index = PropertyIndex::new();

    for file in files {
        if is_ambiguous(&file.filename, separator) {
            crate::log_warn!(
                logger,
                "Skipping ambiguous file {}, because of separator '{}'",
                file.path.display(),
                separator
            );
            continue;
        }

        let entry = SecretEntry::new(file.filename, separator, file.location);
        if let Err(kept) = index.insert_first_wins(entry.key, entry.location.clone()) {
            crate::log_warn!(
                logger,
                "Encountered duplicates. Secret in {} will be ignored. Reading content of {} instead.",
                entry.location,
                kept
            );
        }
    }

    index
}
