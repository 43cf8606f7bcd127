//! # activity-board
//!
//! Leptos + WASM frontend for the activity signup service.
//!
//! The crate fetches the activity roster from the backend REST API, renders
//! one card per activity, and submits signup/unregister requests. The `csr`
//! feature builds the browser bundle (HTTP, timers, logging sinks); without it
//! the crate compiles natively with inert network and timer stubs for tests.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod timer;

/// WASM entry point: installs panic/log hooks and mounts the app into `<body>`.
///
/// Runs automatically when the bundle loads, so the crate works as a drop-in
/// static page in front of the activity backend.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
