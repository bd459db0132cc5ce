//! Fibre Reborn - marketing site
//!
//! Client-side rendered Leptos application for the Fibre Reborn textile
//! recycling site: scroll reveal, sticky navbar, hero parallax, smooth anchor
//! scrolling, service card hover and the B2C order, B2B quote and contact
//! forms with a simulated submission.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting Fibre Reborn");
    leptos::mount::mount_to_body(App);
}
