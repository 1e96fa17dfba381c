//! Filesystem-backed key-value store.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a temp file that is
//! renamed into place, so a reader sees either the old or the new value.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StorageError;

use super::KeyValueStore;

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

/// A [`KeyValueStore`] that keeps one file per key in a directory.
///
/// The directory is created on first write. Files are readable only by the
/// owner on Unix.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the directory holding the store's files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path for a key.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
            });
        }

        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key).ok()?;

        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read stored value");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let map_io = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(map_io)?;

        let temp_path = path.with_extension("tmp");

        // A leftover temp file keeps its old mode when reopened
        match fs::remove_file(&temp_path) {
            Ok(()) => debug!(path = %temp_path.display(), "Removed stale temp file"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(map_io(e)),
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&temp_path).map_err(map_io)?;
        file.write_all(value.as_bytes()).map_err(map_io)?;
        file.sync_all().map_err(map_io)?;
        drop(file);

        fs::rename(&temp_path, &path).map_err(map_io)?;

        debug!(path = %path.display(), "Stored value");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "Removed stored value");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}
