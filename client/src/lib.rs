//! # client
//!
//! Leptos + WASM front-end for the Inkly publishing site.
//!
//! Reader-facing routes browse categories and articles; the writer dashboard
//! sits behind a role-checked route guard. Record shapes and the list
//! presenter live in the framework-agnostic `records` and `listing` crates so
//! everything here is view orchestration over them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
