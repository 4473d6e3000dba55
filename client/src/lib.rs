//! # client
//!
//! Leptos + WASM frontend for the Atelier collaborative creative-project app.
//!
//! This crate contains pages, components and application state. Built with
//! the `hydrate` feature it runs in the browser; with `ssr` it is rendered
//! by the `atelier` server.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
