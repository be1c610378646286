//! The persisted form of a list
//!
//! Current layout:
//!
//! ```json
//! { "version": 1, "items": [ { "id": "...", "name": "Milk", "purchased": false } ] }
//! ```
//!
//! Lists saved before versioning are a bare array of items. They are still
//! read and are rewritten in the current layout on the next save.

use crate::error::FormatError;
use crate::item::Item;
use crate::list::ShoppingList;
use serde::Serialize;
use serde_json::Value;

pub const FORMAT_VERSION: u64 = 1;

/// Borrowed view of a list in the current layout
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    version: u64,
    items: &'a ShoppingList,
}

impl<'a> Snapshot<'a> {
    pub fn new(list: &'a ShoppingList) -> Self {
        Self {
            version: FORMAT_VERSION,
            items: list,
        }
    }
}

/// Rebuild a list from a stored JSON value
pub fn decode(value: Value) -> Result<ShoppingList, FormatError> {
    let items = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => {
            let found = map
                .get("version")
                .and_then(Value::as_u64)
                .ok_or(FormatError::UnexpectedShape)?;
            if found != FORMAT_VERSION {
                return Err(FormatError::UnsupportedVersion { found });
            }
            map.remove("items").ok_or(FormatError::UnexpectedShape)?
        }
        _ => return Err(FormatError::UnexpectedShape),
    };

    let items: Vec<Item> = serde_json::from_value(items).map_err(FormatError::Malformed)?;
    ShoppingList::from_items(items).map_err(FormatError::DuplicateId)
}
