// web_app/model/store.rs - Ordered item collection
//
// Append at the end, remove by id, list in insertion order. Uniqueness of
// names is the validator's job; the store accepts whatever it is given.

use serde::{Deserialize, Serialize};

use super::{Item, ItemId};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Append an item to the end of the list
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the item with `id`, keeping the others in their order.
    ///
    /// Returns `None` when no such item exists.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id for the next item: one past the highest id present, or 1.
    ///
    /// Deleting the highest item and adding again hands its id out a second time.
    /// `None` when the highest id is already `u32::MAX`.
    pub fn next_id(&self) -> Option<ItemId> {
        next_id(&self.items)
    }
}

pub(crate) fn next_id(items: &[Item]) -> Option<ItemId> {
    match items.iter().map(|item| item.id).max() {
        Some(highest) => highest.next(),
        None => Some(ItemId::FIRST),
    }
}

impl<'a> IntoIterator for &'a ItemStore {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
