// web_app/model/mod.rs - Shared data models for client and server
//
// These types carry the widget's whole state. They are plain Rust with no
// Leptos dependency, so the server render, the WASM bundle and the tests all
// share the same rules.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod state;
pub mod store;
pub mod validation;

pub use state::{WidgetMode, WidgetState};
pub use store::ItemStore;
pub use validation::{validate, ValidationError};

/// Identifier assigned to an item when it is added
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Id given to the first item of an empty list
    pub const FIRST: ItemId = ItemId(1);

    /// The id after this one, or `None` once `u32` is used up
    pub fn next(self) -> Option<ItemId> {
        self.0.checked_add(1).map(ItemId)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Item category enumeration
///
/// The draft's "nothing selected" state is `Option<Category>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Stationary,
    Kitchenware,
    Appliance,
}

impl Category {
    /// All categories in selector order
    pub const ALL: [Category; 3] = [
        Category::Stationary,
        Category::Kitchenware,
        Category::Appliance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Stationary => "Stationary",
            Category::Kitchenware => "Kitchenware",
            Category::Appliance => "Appliance",
        }
    }

    /// Parse a selector value, where the empty string is the unselected sentinel
    pub fn from_selection(value: &str) -> Option<Category> {
        value.parse().ok()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// An inventory item (one row of the table)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub price: Decimal,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, category: Category, price: Decimal) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            category,
            price,
        }
    }

    /// Case-insensitive name comparison used for duplicate detection
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Raw, unvalidated text of the item being typed into the form row
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub category: Option<Category>,
    pub price: String,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.category.is_none() && self.price.is_empty()
    }
}

/// Items shown when the page is first loaded
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(1, "Color Pencil set 32", Category::Stationary, Decimal::new(1100, 2)),
        Item::new(2, "Small Kitty Lamp", Category::Appliance, Decimal::new(4400, 2)),
        Item::new(3, "Knife Set 4pcs", Category::Kitchenware, Decimal::new(2311, 2)),
    ]
}
