//! Property index supplier trait

use std::path::PathBuf;

use thiserror::Error;

use super::normalize::PropertyIndex;

/// Errors that can occur while building a property index
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Failed to list secrets directory {path}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot express {0} as a file URI")]
    InvalidPath(PathBuf),
}

pub type IndexResult<T> = Result<T, IndexError>;

/// Source of a `{property key -> location}` index
///
/// `FilenameIndexBuilder` is the filesystem implementation; tests and hosts
/// with other secret layouts can supply their own.
pub trait PropertyIndexSupplier: Send + Sync {
    /// Build a fresh index. An empty index is a normal result.
    fn property_index(&self) -> IndexResult<PropertyIndex>;
}
