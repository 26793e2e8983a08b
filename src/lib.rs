//! # focus-reader-client
//!
//! Leptos + WASM frontend for the Focus Reader e-book application.
//!
//! This crate contains pages, components, application state (including the
//! authentication session store), the navigation guard, and the typed HTTP
//! shims for the remote API. Session state is persisted to browser local
//! storage and restored on startup.

pub mod app;
pub mod components;
pub mod nav;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
