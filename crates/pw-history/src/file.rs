//! Directory-backed storage
//!
//! One file per slot: `<dir>/<key>.json`. Writes land in a temporary file in
//! the same directory and are renamed over the target, so the slot is always
//! either the old value or the new one.

use crate::backend::StorageBackend;
use crate::error::StorageError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const SLOT_EXTENSION: &str = "json";

/// Filesystem backend rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create backend rooted at `dir`
    ///
    /// The directory is created lazily on first write.
    #[inline]
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Data directory
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve the file holding `key`
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] if `key` is empty, starts with a
    /// dot, or has characters outside `[A-Za-z0-9_.-]`.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{SLOT_EXTENSION}")))
    }
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            // Present but not text; hand back a value no decoder accepts
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                tracing::warn!(path = %path.display(), "slot file is not valid UTF-8");
                Ok(Some(String::new()))
            }
            Err(e) => Err(StorageError::from_io(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::from_io(key, e))?;

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| StorageError::from_io(key, e))?;
        tmp.write_all(value.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| StorageError::from_io(key, e))?;
        tmp.persist(&path)
            .map_err(|e| StorageError::from_io(key, e.error))?;

        tracing::trace!(key, path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::from_io(key, e)),
        }
    }
}
