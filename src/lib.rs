pub mod api;
pub mod common;
#[cfg(feature = "ssr")]
pub mod config;
pub mod form;
pub mod frontend;
#[cfg(feature = "ssr")]
pub mod services;
pub mod types;
pub mod validation;

/// WASM hydration entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(frontend::App);
}
