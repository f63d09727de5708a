// web_app/pages/mod.rs - Page components module
//
// - InventoryPage: the item management widget

pub mod inventory;

// Re-export page components
pub use inventory::InventoryPage;
