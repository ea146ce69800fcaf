//! Startup procedure: index, read, merge

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::SecretsSettings;
use crate::error::Result;
use crate::index::{FilenameIndexBuilder, PropertyIndexSupplier};
use crate::logging::{ConsoleLogger, SharedLogger};
use crate::reader::{FileSecretReader, SecretReader};
use crate::sources::{PropertySources, SecretPropertiesSource};

/// Loads secret files into a property source chain
///
/// The chain doubles as the configuration the settings are read from, so
/// `secrets.file.base-dir` can come from any source already in it (for
/// example `SECRETS_FILE_BASEDIR` in the environment).
///
/// # Example
///
/// ```no_run
/// use filesecrets_core::{PropertySources, SecretsLoader};
///
/// let mut sources = PropertySources::standard();
/// let loaded = SecretsLoader::default().load(&mut sources)?;
/// println!("{loaded} secret properties");
/// # Ok::<(), filesecrets_core::Error>(())
/// ```
pub struct SecretsLoader {
    logger: SharedLogger,
    reader: Arc<dyn SecretReader>,
}

impl SecretsLoader {
    /// Loader that reads secrets from the local filesystem
    pub fn new(logger: SharedLogger) -> Self {
        Self {
            logger,
            reader: Arc::new(FileSecretReader::new()),
        }
    }

    /// Use a different reader for index locations
    pub fn with_reader(mut self, reader: Arc<dyn SecretReader>) -> Self {
        self.reader = reader;
        self
    }

    /// Resolve settings from `sources`, scan the directory and merge
    ///
    /// Returns the number of properties contributed by this pass.
    pub fn load(&self, sources: &mut PropertySources) -> Result<usize> {
        let settings = SecretsSettings::resolve(&*sources)?;
        let builder = FilenameIndexBuilder::new(settings, self.logger.clone());
        self.load_with(&builder, sources)
    }

    /// Same as `load` with a caller-supplied index
    pub fn load_with(&self, supplier: &dyn PropertyIndexSupplier, sources: &mut PropertySources) -> Result<usize> {
        let index = supplier.property_index()?;

        let mut properties = HashMap::with_capacity(index.len());
        for (key, location) in index {
            let value = self.reader.read(&location)?;
            properties.insert(key, value);
        }

        let count = properties.len();
        SecretPropertiesSource::merge(properties, sources)?;
        crate::log_info!(self.logger, "Loaded {} secret properties", count);
        Ok(count)
    }
}

impl Default for SecretsLoader {
    /// Filesystem reader, stderr logging filtered by `FILESECRETS_LOG_LEVEL`
    fn default() -> Self {
        Self::new(Arc::new(ConsoleLogger::from_env()))
    }
}

impl std::fmt::Debug for SecretsLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretsLoader").finish_non_exhaustive()
    }
}
