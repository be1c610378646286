//! The slot storage abstraction and its in-memory backend

use crate::error::StorageError;
use std::collections::HashMap;

/// A backend holding named string slots
///
/// Writes replace the whole slot. Backends are used from a single thread,
/// so no locking is involved.
pub trait SlotStorage {
    /// Read a slot, returning `None` when it has never been written
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot with new contents
    fn write(&mut self, slot: &str, contents: &str) -> Result<(), StorageError>;

    /// Remove a slot, returning whether it existed
    fn remove(&mut self, slot: &str) -> Result<bool, StorageError>;

    /// Whether writes outlive the process
    fn is_persistent(&self) -> bool {
        true
    }
}

impl<S: SlotStorage + ?Sized> SlotStorage for Box<S> {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        (**self).read(slot)
    }

    fn write(&mut self, slot: &str, contents: &str) -> Result<(), StorageError> {
        (**self).write(slot, contents)
    }

    fn remove(&mut self, slot: &str) -> Result<bool, StorageError> {
        (**self).remove(slot)
    }

    fn is_persistent(&self) -> bool {
        (**self).is_persistent()
    }
}

/// Check that a slot name is usable by every backend
///
/// Names must be non-empty, must not start with a dot, and may only contain
/// ASCII letters, digits, `-`, `_` and `.`.
pub fn validate_slot(slot: &str) -> Result<(), StorageError> {
    let valid = !slot.is_empty()
        && !slot.starts_with('.')
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidSlot(slot.to_string()))
    }
}

/// Slot storage that lives only as long as the process
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage with one slot already filled
    pub fn with_slot(slot: impl Into<String>, contents: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(slot.into(), contents.into());
        Self { slots }
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        validate_slot(slot)?;
        Ok(self.slots.get(slot).cloned())
    }

    fn write(&mut self, slot: &str, contents: &str) -> Result<(), StorageError> {
        validate_slot(slot)?;
        self.slots.insert(slot.to_string(), contents.to_string());
        Ok(())
    }

    fn remove(&mut self, slot: &str) -> Result<bool, StorageError> {
        validate_slot(slot)?;
        Ok(self.slots.remove(slot).is_some())
    }

    fn is_persistent(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_names_are_restricted() {
        assert!(validate_slot("shoppingList").is_ok());
        assert!(validate_slot("list-v1.backup").is_ok());

        for bad in ["", ".hidden", "../escape", "a/b", "with space"] {
            assert!(
                matches!(validate_slot(bad), Err(StorageError::InvalidSlot(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn memory_storage_overwrites_and_removes() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read("list").unwrap(), None);

        storage.write("list", "[]").unwrap();
        storage.write("list", "[1]").unwrap();
        assert_eq!(storage.read("list").unwrap().as_deref(), Some("[1]"));

        assert!(storage.remove("list").unwrap());
        assert!(!storage.remove("list").unwrap());
        assert_eq!(storage.read("list").unwrap(), None);
    }

    #[test]
    fn boxed_storage_delegates() {
        let mut storage: Box<dyn SlotStorage> = Box::new(MemoryStorage::with_slot("list", "[]"));
        assert_eq!(storage.read("list").unwrap().as_deref(), Some("[]"));

        storage.write("other", "{}").unwrap();
        assert_eq!(storage.read("other").unwrap().as_deref(), Some("{}"));
        assert!(!storage.is_persistent());
    }
}
