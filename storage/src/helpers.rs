//! Typed access to slots
//!
//! These functions serialize values to JSON on the way in and deserialize on
//! the way out, so callers deal in their own types instead of raw strings.

use crate::error::StorageError;
use crate::slot::SlotStorage;
use serde::{Serialize, de::DeserializeOwned};

/// Read and deserialize a slot
///
/// # Returns
///
/// Returns `Ok(None)` if the slot has never been written.
///
/// # Errors
///
/// Returns an error if the backend cannot be read or the stored JSON does not
/// deserialize into `T`.
///
/// # Example
///
/// ```
/// use shopping_list_storage::{MemoryStorage, read_value};
///
/// let storage = MemoryStorage::with_slot("tags", r#"["fruit","dairy"]"#);
/// let tags: Option<Vec<String>> = read_value(&storage, "tags").unwrap();
/// assert_eq!(tags, Some(vec!["fruit".to_string(), "dairy".to_string()]));
/// ```
pub fn read_value<T, S>(storage: &S, slot: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: SlotStorage + ?Sized,
{
    let Some(raw) = storage.read(slot)? else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Deserialize {
            slot: slot.to_string(),
            source,
        })
}

/// Serialize a value and overwrite a slot with it
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or the backend rejects
/// the write.
pub fn write_value<T, S>(storage: &mut S, slot: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: SlotStorage + ?Sized,
{
    let json = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        slot: slot.to_string(),
        source,
    })?;

    storage.write(slot, &json)
}

/// Remove a slot
///
/// # Returns
///
/// Returns `Ok(true)` if the slot was removed, `Ok(false)` if it didn't exist.
///
/// # Errors
///
/// Returns an error if the backend cannot remove the slot.
pub fn remove_value<S>(storage: &mut S, slot: &str) -> Result<bool, StorageError>
where
    S: SlotStorage + ?Sized,
{
    storage.remove(slot)
}

/// Check whether a slot holds a value, without decoding it
///
/// # Errors
///
/// Returns an error if the backend cannot be read.
pub fn has_value<S>(storage: &S, slot: &str) -> Result<bool, StorageError>
where
    S: SlotStorage + ?Sized,
{
    Ok(storage.read(slot)?.is_some())
}
