//! Resolving secret locations to their contents

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Errors that can occur while reading a secret
#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Invalid secret location {location}: {source}")]
    InvalidLocation {
        location: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported scheme '{0}' in secret location")]
    UnsupportedScheme(String),

    #[error("Secret location is not a local file: {0}")]
    NotLocal(String),

    #[error("Failed to read secret {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ReaderResult<T> = Result<T, ReaderError>;

/// Turns an index location into the secret's value
pub trait SecretReader: Send + Sync {
    fn read(&self, location: &str) -> ReaderResult<String>;
}

/// Reads `file://` locations from the local filesystem
///
/// The content is returned exactly as stored, trailing newline included.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSecretReader;

impl FileSecretReader {
    pub fn new() -> Self {
        Self
    }
}

impl SecretReader for FileSecretReader {
    fn read(&self, location: &str) -> ReaderResult<String> {
        let url = Url::parse(location).map_err(|source| ReaderError::InvalidLocation {
            location: location.to_string(),
            source,
        })?;
        if url.scheme() != "file" {
            return Err(ReaderError::UnsupportedScheme(url.scheme().to_string()));
        }
        let path = url
            .to_file_path()
            .map_err(|_| ReaderError::NotLocal(location.to_string()))?;

        fs::read_to_string(&path).map_err(|source| ReaderError::Io { path, source })
    }
}
