use crate::item::ItemId;
use shopping_list_storage::StorageError;
use thiserror::Error;

/// The persisted list exists but cannot be turned back into a list
///
/// Never fatal: loading falls back to an empty list.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("stored list could not be read")]
    Unreadable(#[source] StorageError),

    #[error("stored list is malformed")]
    Malformed(#[source] serde_json::Error),

    #[error("stored list has unsupported format version {found}")]
    UnsupportedVersion { found: u64 },

    #[error("stored list has unexpected shape: expected an array or a versioned object")]
    UnexpectedShape,

    #[error("stored list repeats item id '{0}'")]
    DuplicateId(ItemId),
}

impl From<StorageError> for FormatError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Deserialize { source, .. } => Self::Malformed(source),
            other => Self::Unreadable(other),
        }
    }
}

/// Writing the list to its slot failed
///
/// The in-memory list stays authoritative; the failure is kept as a warning
/// until a later write succeeds.
#[derive(Debug, Error)]
#[error("could not save shopping list to '{slot}'")]
pub struct PersistError {
    pub slot: String,
    pub source: StorageError,
}
