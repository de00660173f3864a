//! HALI Cần Thơ - landing page for a bottled-water delivery business
//!
//! Server-rendered with Leptos and axum, hydrated in the browser from WebAssembly.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
#[cfg(feature = "ssr")]
pub mod server;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
