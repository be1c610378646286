use std::io;
use thiserror::Error;

/// Errors raised by slot storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Slot names double as file names, so they are restricted
    #[error("invalid slot name '{0}'")]
    InvalidSlot(String),

    #[error("failed to read slot '{slot}'")]
    Read { slot: String, source: io::Error },

    #[error("failed to write slot '{slot}'")]
    Write { slot: String, source: io::Error },

    /// The backend refused the write, e.g. a browser quota was exceeded
    #[error("storage rejected write to slot '{slot}': {reason}")]
    Rejected { slot: String, reason: String },

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("failed to serialize value for slot '{slot}'")]
    Serialize {
        slot: String,
        source: serde_json::Error,
    },

    #[error("slot '{slot}' does not hold a valid value")]
    Deserialize {
        slot: String,
        source: serde_json::Error,
    },
}
