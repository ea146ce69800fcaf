//! Crate-level error type

use thiserror::Error;

use crate::config::ConfigError;
use crate::index::IndexError;
use crate::reader::ReaderError;
use crate::sources::SourceError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Reader(#[from] ReaderError),
}

pub type Result<T> = std::result::Result<T, Error>;
