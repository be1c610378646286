//! `localStorage`-backed slots for browser builds

use crate::error::StorageError;
use crate::slot::{SlotStorage, validate_slot};

/// Slot storage backed by `window.localStorage`
///
/// Each slot is one localStorage key. The storage object is looked up on
/// every call, so a page that loses storage access degrades to errors rather
/// than a stale handle.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    /// Whether the page currently grants access to `localStorage`
    pub fn is_available() -> bool {
        Self::storage().is_ok()
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .ok()
            .flatten()
            .ok_or_else(|| StorageError::Unavailable("localStorage unavailable".to_string()))
    }
}

impl SlotStorage for LocalStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        validate_slot(slot)?;
        Self::storage()?
            .get_item(slot)
            .map_err(|e| StorageError::Unavailable(format!("localStorage get_item failed: {e:?}")))
    }

    fn write(&mut self, slot: &str, contents: &str) -> Result<(), StorageError> {
        validate_slot(slot)?;
        Self::storage()?
            .set_item(slot, contents)
            .map_err(|e| StorageError::Rejected {
                slot: slot.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn remove(&mut self, slot: &str) -> Result<bool, StorageError> {
        validate_slot(slot)?;
        let storage = Self::storage()?;
        let existed = self.read(slot)?.is_some();
        storage.remove_item(slot).map_err(|e| StorageError::Rejected {
            slot: slot.to_string(),
            reason: format!("{e:?}"),
        })?;
        Ok(existed)
    }
}
