//! File-backed slots
//!
//! Each slot is stored as `<dir>/<slot>.json`. Writes go to a sibling
//! temporary file first and are renamed into place, so readers only ever see
//! a complete snapshot.

use crate::app_name::AppName;
use crate::error::StorageError;
use crate::slot::{SlotStorage, validate_slot};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Slot storage rooted in a directory on disk
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `dir`
    ///
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a storage in the platform config directory for `app_name`
    ///
    /// Returns `None` when the platform has no such directory.
    pub fn for_app(app_name: &AppName) -> Option<Self> {
        app_name.storage_dir().map(Self::new)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the file path backing a slot
    pub fn slot_path(&self, slot: &str) -> Result<PathBuf, StorageError> {
        validate_slot(slot)?;
        Ok(self.dir.join(format!("{}.json", slot)))
    }
}

impl SlotStorage for FileStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(slot)?;

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Read {
                    slot: slot.to_string(),
                    source,
                });
            }
        };

        // An empty file is what an interrupted first write used to leave behind
        if contents.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(contents))
    }

    fn write(&mut self, slot: &str, contents: &str) -> Result<(), StorageError> {
        let path = self.slot_path(slot)?;
        let write_err = |source: std::io::Error| StorageError::Write {
            slot: slot.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, contents).map_err(write_err)?;
        if let Err(source) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_err(source));
        }

        debug!(slot, path = %path.display(), bytes = contents.len(), "wrote slot");
        Ok(())
    }

    fn remove(&mut self, slot: &str) -> Result<bool, StorageError> {
        let path = self.slot_path(slot)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StorageError::Write {
                slot: slot.to_string(),
                source,
            }),
        }
    }
}
