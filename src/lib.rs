// lib.rs - Root module for the item_manager library
//
// The model and render modules build everywhere; the Leptos components are
// only compiled for the server (`ssr`) or the browser (`hydrate`).

pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point, called once the bundle has loaded in the browser
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
