// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, TextInput, NumberInput, SelectString, etc.)
// - inventory.rs: Table components (ItemTable, ItemRow, DraftRow, CategoryCell)

pub mod common;
pub mod inventory;

// Re-export commonly used components for convenience
pub use common::*;
pub use inventory::*;
