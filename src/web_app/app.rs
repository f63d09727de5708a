// web_app/app.rs - Root application component
//
// Sets up meta tags, the stylesheet and the single route.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::InventoryPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text="Item Management" />
        <Meta name="description" content="In-memory item inventory with add and delete" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/item_manager.css" />

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=InventoryPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Go to Item Management"</a>
        </div>
    }
}
