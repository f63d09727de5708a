// web_app/pages/inventory.rs - Item management page
//
// Owns the widget state in a single signal. Every user action maps to one
// `WidgetState` method; the table is re-derived from `render::project`.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::{Category, ItemId, WidgetState};
use crate::web_app::render::project;

/// Main inventory page component
#[component]
pub fn InventoryPage() -> impl IntoView {
    let state = RwSignal::new(WidgetState::seeded());

    let table = Memo::new(move |_| state.with(project));

    let on_name = Callback::new(move |name: String| state.update(|s| s.set_name(name)));
    let on_category =
        Callback::new(move |category: Option<Category>| state.update(|s| s.set_category(category)));
    let on_price = Callback::new(move |price: String| state.update(|s| s.set_price(price)));

    let on_add = Callback::new(move |()| {
        state.update(|s| {
            if let Err(err) = s.submit() {
                // The state now carries the message shown under the table
                debug_assert_eq!(s.error(), Some(err.to_string().as_str()));
            }
        });
    });

    let on_delete = Callback::new(move |id: ItemId| {
        state.update(|s| {
            s.delete(id);
        });
    });

    view! {
        <div class="item-manager-container">
            <h2>"Item Management"</h2>
            <ItemTable
                table=table
                on_delete=on_delete
                on_name=on_name
                on_category=on_category
                on_price=on_price
                on_add=on_add
            />
        </div>
    }
}
