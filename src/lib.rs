//! # studio
//!
//! Leptos + WASM frontend for the music collaboration studio: user profiles
//! with portfolio, playlist, liked-track and about tabs, and a projects page
//! with tab filtering and a start-project dialog.
//!
//! Pure view state lives in `state` and is unit-tested without a DOM. Pages
//! and components bind that state to signals; sample data comes from the
//! embedded fixtures in `data`.

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic and log hooks, then hydrates the
/// server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
