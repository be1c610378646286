//! Shopping list
//!
//! A single-window shopping list: add items, tick them off as purchased,
//! delete them. The list lives in a [`ListStore`], which saves the whole list
//! to a storage slot after every change and restores it on start.
//!
//! # Example
//!
//! ```
//! use shopping_list::ListStore;
//! use shopping_list_storage::MemoryStorage;
//!
//! let mut store = ListStore::open(MemoryStorage::new(), "shoppingList");
//! store.add("Milk");
//! store.add("Eggs");
//!
//! let milk = store.list().items()[0].id().clone();
//! store.toggle(&milk);
//!
//! assert_eq!(store.list().remaining_label(), "1 item left to buy");
//! assert_eq!(&store.load(), store.list());
//! ```

mod app;
mod config;
mod error;
mod item;
mod list;
mod snapshot;
mod store;

pub use app::{App, Message};
pub use config::{Config, DEFAULT_SLOT, STORAGE_DIR_VAR};
pub use error::{FormatError, PersistError};
pub use item::{EmptyItemName, Item, ItemId, ItemName};
pub use list::ShoppingList;
pub use snapshot::{FORMAT_VERSION, Snapshot};
pub use store::ListStore;
