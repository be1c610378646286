//! The list store: in-memory list plus its persisted copy
//!
//! Every mutation edits the in-memory list and then writes the whole list to
//! the storage slot before returning. Storage failures never escape: a bad
//! stored list loads as an empty one, and a failed write is kept as a warning
//! while the in-memory list carries on.

use crate::error::{FormatError, PersistError};
use crate::item::{Item, ItemId, ItemName};
use crate::list::ShoppingList;
use crate::snapshot::{self, Snapshot};
use serde_json::Value;
use shopping_list_storage::{SlotStorage, read_value, write_value};
use std::error::Error;
use tracing::{debug, info, warn};

/// Owner of the shopping list and the slot it is saved in
#[derive(Debug)]
pub struct ListStore<S> {
    storage: S,
    slot: String,
    list: ShoppingList,
    warning: Option<PersistError>,
}

impl<S: SlotStorage> ListStore<S> {
    /// Open the store and restore the list saved in `slot`
    pub fn open(storage: S, slot: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            slot: slot.into(),
            list: ShoppingList::new(),
            warning: None,
        };
        store.list = store.load();
        store
    }

    /// Read the persisted list
    ///
    /// A missing slot gives an empty list, and so does a slot that cannot be
    /// decoded; the latter is logged.
    pub fn load(&self) -> ShoppingList {
        match self.try_load() {
            Ok(list) => {
                info!(slot = %self.slot, items = list.len(), "loaded shopping list");
                list
            }
            Err(err) => {
                warn!(
                    slot = %self.slot,
                    error = &err as &dyn Error,
                    "discarding unreadable shopping list"
                );
                ShoppingList::new()
            }
        }
    }

    /// Read the persisted list, reporting why it could not be decoded
    pub fn try_load(&self) -> Result<ShoppingList, FormatError> {
        match read_value::<Value, _>(&self.storage, &self.slot)? {
            Some(value) => snapshot::decode(value),
            None => Ok(ShoppingList::new()),
        }
    }

    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    /// The last failed save, cleared once a save succeeds
    pub fn warning(&self) -> Option<&PersistError> {
        self.warning.as_ref()
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a new unpurchased item
    ///
    /// Names that are empty after trimming are ignored without saving.
    pub fn add(&mut self, name: &str) -> &ShoppingList {
        let Ok(name) = ItemName::parse(name) else {
            debug!("ignoring empty item name");
            return &self.list;
        };

        let id = loop {
            let id = ItemId::generate();
            if !self.list.contains(&id) {
                break id;
            }
        };

        debug!(%id, %name, "adding item");
        self.list.push(Item::new(id, name));
        self.persist();
        &self.list
    }

    /// Flip the purchased flag of an item; unknown ids are ignored
    pub fn toggle(&mut self, id: &ItemId) -> &ShoppingList {
        if self.list.toggle(id) {
            debug!(%id, "toggled item");
            self.persist();
        }
        &self.list
    }

    /// Remove an item; unknown ids are ignored
    pub fn delete(&mut self, id: &ItemId) -> &ShoppingList {
        if self.list.remove(id) {
            debug!(%id, "deleted item");
            self.persist();
        }
        &self.list
    }

    /// Write the current list to its slot, overwriting what was there
    ///
    /// Returns whether the write succeeded. A failure is logged and kept as
    /// the store's [`warning`](Self::warning) until a later write succeeds.
    pub fn persist(&mut self) -> bool {
        match write_value(&mut self.storage, &self.slot, &Snapshot::new(&self.list)) {
            Ok(()) => {
                self.warning = None;
                true
            }
            Err(source) => {
                warn!(
                    slot = %self.slot,
                    error = &source as &dyn Error,
                    "failed to save shopping list"
                );
                self.warning = Some(PersistError {
                    slot: self.slot.clone(),
                    source,
                });
                false
            }
        }
    }
}
