//! Shopping list entries

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Opaque identifier of an [`Item`]
///
/// Fresh ids are random v4 UUIDs. Ids read back from storage are kept as
/// whatever text they were saved with, so lists written by older builds keep
/// their ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a new random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raised when an item name is empty after trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("item name must not be empty")]
pub struct EmptyItemName;

/// Trimmed, non-empty item name
///
/// [`ItemName::parse`] is the only way to build one, and deserialization goes
/// through it too.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Trim `raw` and accept it if anything is left
    ///
    /// ```
    /// use shopping_list::ItemName;
    ///
    /// assert_eq!(ItemName::parse("  Milk ").unwrap().as_str(), "Milk");
    /// assert!(ItemName::parse("   ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, EmptyItemName> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmptyItemName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = EmptyItemName;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if !raw.is_empty() && raw.trim().len() == raw.len() {
            return Ok(Self(raw));
        }
        Self::parse(&raw)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> Self {
        name.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single shopping list entry
///
/// The id and name are fixed at creation. Only the purchased flag changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: ItemName,
    purchased: bool,
}

impl Item {
    /// Create an unpurchased item
    pub fn new(id: ItemId, name: ItemName) -> Self {
        Self {
            id,
            name,
            purchased: false,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn is_purchased(&self) -> bool {
        self.purchased
    }

    pub(crate) fn toggle_purchased(&mut self) {
        self.purchased = !self.purchased;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let ids: std::collections::HashSet<_> = (0..1000).map(|_| ItemId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(ItemName::parse("\tEggs \n").unwrap().as_str(), "Eggs");
        assert_eq!(ItemName::parse(""), Err(EmptyItemName));
        assert_eq!(ItemName::parse(" \t "), Err(EmptyItemName));
    }

    #[test]
    fn deserialized_names_obey_the_same_rules() {
        let name: ItemName = serde_json::from_str(r#"" Bread ""#).unwrap();
        assert_eq!(name.as_str(), "Bread");

        assert!(serde_json::from_str::<ItemName>(r#""   ""#).is_err());
    }

    #[test]
    fn items_use_the_stored_field_names() {
        let item = Item::new(ItemId::new("1712345678901"), ItemName::parse("Milk").unwrap());
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": "1712345678901", "name": "Milk", "purchased": false })
        );
    }

    #[test]
    fn toggling_flips_only_the_flag() {
        let mut item = Item::new(ItemId::new("a"), ItemName::parse("Milk").unwrap());
        item.toggle_purchased();
        assert!(item.is_purchased());
        item.toggle_purchased();
        assert!(!item.is_purchased());
        assert_eq!(item.name().as_str(), "Milk");
    }
}
