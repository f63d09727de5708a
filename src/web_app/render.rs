// web_app/render.rs - Pure projection from widget state to table contents
//
// Components only draw what `project` returns, so everything about what is
// displayed (price text, which icon, whether the error line exists) can be
// checked without a browser.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::web_app::model::{Category, Draft, Item, ItemId, WidgetState};

pub const DELETE_ICON: &str = "/icons/delete.svg";

/// Label of the selector's "nothing chosen" option
pub const SELECT_PLACEHOLDER: &str = "Select...";

/// How a category cell is drawn
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryIcon {
    Image { src: &'static str, alt: &'static str },
    Text(String),
}

impl CategoryIcon {
    /// Look up the icon for a category name; unknown names are shown as text
    pub fn lookup(value: &str) -> Self {
        match Category::from_selection(value) {
            Some(category) => category.into(),
            None => CategoryIcon::Text(value.to_string()),
        }
    }
}

impl From<Category> for CategoryIcon {
    fn from(category: Category) -> Self {
        let src = match category {
            Category::Stationary => "/icons/ink_pen.svg",
            Category::Kitchenware => "/icons/flatware.svg",
            Category::Appliance => "/icons/electrical_services.svg",
        };
        CategoryIcon::Image {
            src,
            alt: category.as_str(),
        }
    }
}

/// Format a price with exactly two decimal places, rounding half away from zero
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// One rendered item row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRowView {
    pub id: ItemId,
    pub name: String,
    pub icon: CategoryIcon,
    pub price: String,
}

impl From<&Item> for ItemRowView {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            icon: item.category.into(),
            price: format_price(item.price),
        }
    }
}

/// The editable row bound to the draft
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftRowView {
    pub name: String,
    /// Selector value; empty when nothing is selected
    pub category: String,
    pub price: String,
    /// Times the draft has been cleared by a successful add
    pub resets: u64,
}

impl From<&Draft> for DraftRowView {
    fn from(draft: &Draft) -> Self {
        Self {
            name: draft.name.clone(),
            category: draft
                .category
                .map(|category| category.as_str().to_string())
                .unwrap_or_default(),
            price: draft.price.clone(),
            resets: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<ItemRowView>,
    pub draft: DraftRowView,
    /// `None` means the error line is not rendered at all
    pub error: Option<String>,
}

pub fn project(state: &WidgetState) -> TableView {
    TableView {
        rows: state.items().iter().map(ItemRowView::from).collect(),
        draft: DraftRowView {
            resets: state.draft_resets(),
            ..DraftRowView::from(state.draft())
        },
        error: state.error().map(str::to_string),
    }
}

/// Selector options as (value, label) pairs, sentinel first
pub fn category_options() -> Vec<(String, String)> {
    std::iter::once((String::new(), SELECT_PLACEHOLDER.to_string()))
        .chain(
            Category::ALL
                .into_iter()
                .map(|category| (category.as_str().to_string(), category.as_str().to_string())),
        )
        .collect()
}
