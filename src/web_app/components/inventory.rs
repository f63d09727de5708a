// web_app/components/inventory.rs - Inventory table components
//
// - CategoryCell: icon (or raw text) for a category
// - ItemRow: one item with its delete action
// - DraftRow: the editable row that adds new items
// - ItemTable: header, rows, draft row and the error line

use leptos::prelude::*;

use crate::web_app::components::common::*;
use crate::web_app::model::{Category, ItemId};
use crate::web_app::render::{
    category_options, CategoryIcon, DraftRowView, ItemRowView, TableView, DELETE_ICON,
};

#[component]
pub fn CategoryCell(icon: CategoryIcon) -> impl IntoView {
    match icon {
        CategoryIcon::Image { src, alt } => view! {
            <img src=src alt=alt title=alt width="24" class="category-icon" />
        }
        .into_any(),
        CategoryIcon::Text(text) => view! { <span>{text}</span> }.into_any(),
    }
}

/// A single item row
#[component]
pub fn ItemRow(
    row: ItemRowView,
    /// Called with the row's id when the delete icon is clicked
    on_delete: Callback<ItemId>,
) -> impl IntoView {
    let id = row.id;

    view! {
        <tr>
            <td>{id.to_string()}</td>
            <td>{row.name}</td>
            <td><CategoryCell icon=row.icon /></td>
            <td><PriceDisplay price=row.price /></td>
            <td>
                <IconButton
                    src=DELETE_ICON
                    alt="Delete"
                    on_click=Callback::new(move |()| on_delete.run(id))
                />
            </td>
        </tr>
    }
}

/// Editable row bound to the draft
#[component]
pub fn DraftRow(
    #[prop(into)]
    draft: Signal<DraftRowView>,
    on_name: Callback<String>,
    on_category: Callback<Option<Category>>,
    on_price: Callback<String>,
    on_add: Callback<()>,
) -> impl IntoView {
    let name = Signal::derive(move || draft.get().name);
    let category = Signal::derive(move || draft.get().category);
    // Memoized so the price field is only cleared when the count changes
    let resets = Memo::new(move |_| draft.get().resets);

    let on_select = Callback::new(move |value: String| {
        on_category.run(Category::from_selection(&value));
    });

    view! {
        <tr class="draft-row">
            <td></td>
            <td>
                <TextInput value=name on_input=on_name on_enter=on_add label="Item name" />
            </td>
            <td>
                <SelectString
                    value=category
                    options=category_options()
                    on_change=on_select
                    label="Category"
                />
            </td>
            <td>
                <NumberInput
                    reset=resets
                    on_input=on_price
                    on_enter=on_add
                    label="Price"
                />
            </td>
            <td>
                <Button on_click=on_add>"Add Item"</Button>
            </td>
        </tr>
    }
}

/// The whole inventory table
#[component]
pub fn ItemTable(
    #[prop(into)]
    table: Signal<TableView>,
    on_delete: Callback<ItemId>,
    on_name: Callback<String>,
    on_category: Callback<Option<Category>>,
    on_price: Callback<String>,
    on_add: Callback<()>,
) -> impl IntoView {
    let draft = Signal::derive(move || table.get().draft);
    let error = Signal::derive(move || table.get().error);

    view! {
        <table class="item-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Category"</th>
                    <th>"Price"</th>
                    <th>"Action"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || table.get().rows
                    key=|row| row.id
                    children=move |row| view! { <ItemRow row=row on_delete=on_delete /> }
                />
                <DraftRow
                    draft=draft
                    on_name=on_name
                    on_category=on_category
                    on_price=on_price
                    on_add=on_add
                />
            </tbody>
        </table>

        {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
    }
}
