// web_app/model/state.rs - The widget's owned state
//
// One struct holds the items, the draft row and the error message. Every
// change goes through a method here; the Leptos page wraps it in a single
// signal and re-renders from `render::project`.

use serde::{Deserialize, Serialize};

use super::{seed_items, validate, Category, Draft, Item, ItemId, ItemStore, ValidationError};

/// What the widget is currently showing below the table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetMode {
    #[default]
    Idle,
    ShowingError,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetState {
    items: ItemStore,
    draft: Draft,
    error: Option<String>,
    draft_resets: u64,
}

impl WidgetState {
    /// State of a freshly loaded page
    pub fn seeded() -> Self {
        Self::with_items(seed_items())
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: ItemStore::from_items(items),
            ..Self::default()
        }
    }

    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Number of successful adds that have cleared the draft
    pub fn draft_resets(&self) -> u64 {
        self.draft_resets
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn mode(&self) -> WidgetMode {
        match self.error {
            Some(_) => WidgetMode::ShowingError,
            None => WidgetMode::Idle,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        tracing::debug!(name = %self.draft.name, "draft name changed");
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.draft.category = category;
        tracing::debug!(?category, "draft category changed");
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.draft.price = price.into();
        tracing::debug!(price = %self.draft.price, "draft price changed");
    }

    pub fn set_draft(&mut self, draft: Draft) {
        self.draft = draft;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Attempt to add the draft as a new item.
    ///
    /// The error is cleared first. On success the item is appended and the
    /// draft reset; on failure the draft is kept and the message shown.
    pub fn submit(&mut self) -> Result<ItemId, ValidationError> {
        self.clear_error();

        match validate(&self.draft, self.items.list()) {
            Ok(item) => {
                let id = item.id;
                tracing::info!(%id, name = %item.name, category = %item.category, price = %item.price, "item added");
                self.items.add(item);
                self.draft = Draft::default();
                self.draft_resets += 1;
                Ok(id)
            }
            Err(err) => {
                tracing::info!(error = %err, "item rejected");
                self.set_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Delete the item with `id`; absent ids leave the state untouched
    pub fn delete(&mut self, id: ItemId) -> Option<Item> {
        let removed = self.items.remove(id);
        match &removed {
            Some(item) => tracing::info!(%id, name = %item.name, "item deleted"),
            None => tracing::debug!(%id, "delete ignored, no such item"),
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_and_idle() {
        let state = WidgetState::default();
        assert!(state.items().is_empty());
        assert!(state.draft().is_empty());
        assert_eq!(state.mode(), WidgetMode::Idle);
    }

    #[test]
    fn test_set_error_changes_mode() {
        let mut state = WidgetState::seeded();
        state.set_error("boom");
        assert_eq!(state.mode(), WidgetMode::ShowingError);
        assert_eq!(state.error(), Some("boom"));
        state.clear_error();
        assert_eq!(state.mode(), WidgetMode::Idle);
    }

    #[test]
    fn test_failed_submit_keeps_draft() {
        let mut state = WidgetState::seeded();
        state.set_name("Stapler");
        state.set_price("3");
        assert_eq!(state.submit(), Err(ValidationError::MissingCategory));
        assert_eq!(state.draft().name, "Stapler");
        assert_eq!(state.draft().price, "3");
        assert_eq!(state.items().len(), 3);
    }
}
