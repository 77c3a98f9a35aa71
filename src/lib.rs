//! RideShare - ride-sharing client
//!
//! Registration and passenger/driver landing screens for a ride-sharing
//! service, built with Leptos and WebAssembly. All persistent data lives in
//! a separate backend reached over HTTP.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
