//! Index Builder
//!
//! Turns a directory of secret files into a `{property key -> file URI}`
//! index. The naming rules live in `normalize` and do no I/O.

mod traits;
pub mod normalize;
mod builder;

pub use traits::{PropertyIndexSupplier, IndexError, IndexResult};
pub use normalize::{
    PropertyIndex, ScannedFile, SecretEntry,
    collect_index, contains_default_separator, is_ambiguous, to_property_key,
};
pub use builder::FilenameIndexBuilder;
