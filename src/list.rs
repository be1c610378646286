//! The ordered shopping list

use crate::item::{Item, ItemId};
use serde::Serialize;
use std::collections::HashSet;

/// Items in display order
///
/// Ids are unique within a list. Every constructor and mutation keeps it
/// that way; [`ShoppingList::from_items`] rejects input that breaks it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<Item>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from items in order
    ///
    /// Returns the first repeated id if any id occurs twice.
    pub fn from_items(items: Vec<Item>) -> Result<Self, ItemId> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(item.id().clone());
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Number of items still to buy
    pub fn unpurchased_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_purchased()).count()
    }

    /// Header line, e.g. "1 item left to buy"
    pub fn remaining_label(&self) -> String {
        let count = self.unpurchased_count();
        let noun = if count == 1 { "item" } else { "items" };
        format!("{count} {noun} left to buy")
    }

    /// Append an item, refusing ids already in the list
    pub(crate) fn push(&mut self, item: Item) -> bool {
        if self.contains(item.id()) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Flip the purchased flag of one item, returning whether it was found
    pub(crate) fn toggle(&mut self, id: &ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.toggle_purchased();
                true
            }
            None => false,
        }
    }

    /// Remove one item, returning whether it was found
    pub(crate) fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }
}

impl<'a> IntoIterator for &'a ShoppingList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemName;

    fn item(id: &str, name: &str) -> Item {
        Item::new(ItemId::new(id), ItemName::parse(name).unwrap())
    }

    fn names(list: &ShoppingList) -> Vec<&str> {
        list.iter().map(|item| item.name().as_str()).collect()
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = ShoppingList::from_items(vec![item("a", "Milk"), item("b", "Eggs"), item("a", "Tea")])
            .unwrap_err();
        assert_eq!(err, ItemId::new("a"));
    }

    #[test]
    fn push_keeps_ids_unique() {
        let mut list = ShoppingList::new();
        assert!(list.push(item("a", "Milk")));
        assert!(!list.push(item("a", "Eggs")));
        assert_eq!(names(&list), ["Milk"]);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut list =
            ShoppingList::from_items(vec![item("a", "Milk"), item("b", "Eggs"), item("c", "Tea")])
                .unwrap();

        assert!(list.remove(&ItemId::new("b")));
        assert_eq!(names(&list), ["Milk", "Tea"]);

        assert!(!list.remove(&ItemId::new("b")));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn toggle_touches_one_item() {
        let mut list = ShoppingList::from_items(vec![item("a", "Milk"), item("b", "Eggs")]).unwrap();

        assert!(list.toggle(&ItemId::new("b")));
        assert!(!list.get(&ItemId::new("a")).unwrap().is_purchased());
        assert!(list.get(&ItemId::new("b")).unwrap().is_purchased());

        assert!(!list.toggle(&ItemId::new("zzz")));
    }

    #[test]
    fn remaining_label_pluralizes() {
        let mut list = ShoppingList::new();
        assert_eq!(list.remaining_label(), "0 items left to buy");

        list.push(item("a", "Milk"));
        assert_eq!(list.remaining_label(), "1 item left to buy");

        list.push(item("b", "Eggs"));
        assert_eq!(list.remaining_label(), "2 items left to buy");

        list.toggle(&ItemId::new("a"));
        assert_eq!(list.unpurchased_count(), 1);
    }
}
