//! # copilot-ui
//!
//! Leptos frontend for the Private RAG Copilot. Server-rendered by
//! `copilot-server` (`ssr` feature) and hydrated in the browser from the WASM
//! build (`hydrate` feature).
//!
//! Contains the document shell, the landing page, the development toolbar
//! loader, and the build-time configuration those pieces read.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod public_env;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
