// web_app/mod.rs - Root module for the Leptos item manager
//
// Architecture:
// - model/: Items, draft, validation and the owned widget state (no Leptos)
// - render.rs: Pure projection of the state into table rows (no Leptos)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod render;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
