//! Filesystem property index builder

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use url::Url;

use crate::config::{ConfigResult, ConfigStore, SecretsSettings};
use crate::logging::{NoOpLogger, SharedLogger};

use super::normalize::{collect_index, PropertyIndex, ScannedFile};
use super::traits::{IndexError, IndexResult, PropertyIndexSupplier};

/// Builds a property index over the filenames in the secrets directory
///
/// The file `spring.datasource.username` yields the key
/// `spring.datasource.username`; with separator `_` the file
/// `SPRING_DATASOURCE_USERNAME` yields the same key. The value is the file's
/// absolute `file://` URI.
///
/// Only direct children that are regular files count. Links are followed, so
/// the symlinked layout Kubernetes uses for secret volumes works while its
/// `..data` directory is skipped. Files are visited in filename order.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use filesecrets_core::config::SecretsSettings;
/// use filesecrets_core::index::{FilenameIndexBuilder, PropertyIndexSupplier};
/// use filesecrets_core::logging::ConsoleLogger;
///
/// let builder = FilenameIndexBuilder::new(SecretsSettings::default(), Arc::new(ConsoleLogger::new()));
/// for (key, location) in &builder.property_index()? {
///     println!("{key} -> {location}");
/// }
/// # Ok::<(), filesecrets_core::index::IndexError>(())
/// ```
pub struct FilenameIndexBuilder {
    settings: SecretsSettings,
    logger: SharedLogger,
}

impl FilenameIndexBuilder {
    pub fn new(settings: SecretsSettings, logger: SharedLogger) -> Self {
        Self { settings, logger }
    }

    /// Resolve the settings from a config store
    pub fn from_config(config: &dyn ConfigStore, logger: SharedLogger) -> ConfigResult<Self> {
        Ok(Self::new(SecretsSettings::resolve(config)?, logger))
    }

    /// Builder that logs nothing
    pub fn silent(settings: SecretsSettings) -> Self {
        Self::new(settings, Arc::new(NoOpLogger::new()))
    }

    pub fn settings(&self) -> &SecretsSettings {
        &self.settings
    }

    /// Every regular file in the directory, sorted by filename
    fn list_files(&self) -> IndexResult<Vec<ScannedFile>> {
        let dir = &self.settings.base_dir;
        let list_error = |source: io::Error| IndexError::ListDirectory {
            path: dir.clone(),
            source,
        };

        match fs::metadata(dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Ok(Vec::new()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            // A path component is a regular file, e.g. `/etc/hosts/secrets`
            Err(e) if e.kind() == io::ErrorKind::NotADirectory => return Ok(Vec::new()),
            Err(e) => return Err(list_error(e)),
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(list_error)? {
            let entry = entry.map_err(list_error)?;
            let path = entry.path();
            if !is_regular_file(&path) {
                continue;
            }

            let filename = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    crate::log_warn!(
                        self.logger,
                        "Skipping file {}, because its name is not valid UTF-8",
                        Path::new(&raw).display()
                    );
                    continue;
                }
            };

            let path = std::path::absolute(&path).map_err(|_| IndexError::InvalidPath(path.clone()))?;
            files.push(ScannedFile {
                filename,
                location: to_uri(&path)?,
                path,
            });
        }

        files.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(files)
    }
}

impl PropertyIndexSupplier for FilenameIndexBuilder {
    fn property_index(&self) -> IndexResult<PropertyIndex> {
        crate::log_debug!(self.logger, "Scanning {} for secrets", self.settings.base_dir.display());
        let files = self.list_files()?;
        Ok(collect_index(files, self.settings.separator, self.logger.as_ref()))
    }
}

impl std::fmt::Debug for FilenameIndexBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilenameIndexBuilder")
            .field("settings", &self.settings)
            .finish()
    }
}

// Follows symlinks; a dangling link is not a regular file.
fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

fn to_uri(absolute: &Path) -> IndexResult<String> {
    Url::from_file_path(absolute)
        .map(String::from)
        .map_err(|_| IndexError::InvalidPath(absolute.to_path_buf()))
}
