//! Slot storage for the shopping list
//!
//! A slot is a single named string value held by a storage backend. The
//! shopping list keeps its whole persisted snapshot in one slot and
//! overwrites it on every change.
//!
//! # Backends
//!
//! - [`FileStorage`]: one JSON file per slot in the platform config directory
//! - [`MemoryStorage`]: a plain map, for tests and as the fallback when no
//!   persistent location is available
//! - `LocalStorage` (wasm32 only): the browser's `window.localStorage`
//!
//! # Example
//!
//! ```no_run
//! use shopping_list_storage::{
//!     AppName, FileStorage, MemoryStorage, SlotStorage, read_value, write_value,
//! };
//!
//! let app_name = AppName::new("com", "example", "myapp");
//! let mut storage: Box<dyn SlotStorage> = match FileStorage::for_app(&app_name) {
//!     Some(storage) => Box::new(storage),
//!     None => Box::new(MemoryStorage::new()),
//! };
//!
//! write_value(&mut storage, "settings", &vec!["dark", "compact"])?;
//! let settings: Option<Vec<String>> = read_value(&storage, "settings")?;
//! # Ok::<(), shopping_list_storage::StorageError>(())
//! ```

mod app_name;
mod error;
mod file;
mod helpers;
#[cfg(target_arch = "wasm32")]
mod local;
mod slot;

pub use app_name::AppName;
pub use error::StorageError;
pub use file::FileStorage;
pub use helpers::{has_value, read_value, remove_value, write_value};
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;
pub use slot::{MemoryStorage, SlotStorage, validate_slot};
