//! # work_log_client
//!
//! WebAssembly controller for the work log page. It validates and submits
//! work entries, renders the hours-per-project summary, generates pre-fill
//! QR codes and pre-fills the form from the page URL.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`entry`] | Form validation and submit response handling |
//! | [`summary`] | Summary response handling and table view model |
//! | [`qr`] | QR input classification and pre-fill URL building |
//! | [`prefill`] | Choosing form values from query parameters |
//! | [`message`] | Status message kinds |
//! | [`api`] | Endpoint paths and HTTP calls (`browser` feature) |
//!
//! Everything except the DOM wiring compiles natively, so the decision logic
//! is tested with plain `cargo test`. Build the browser bundle with the
//! `browser` feature enabled.

pub mod api;
pub mod entry;
pub mod message;
pub mod prefill;
pub mod qr;
pub mod summary;

#[cfg(feature = "browser")]
mod controller;
#[cfg(feature = "browser")]
mod dom;

/// Entry point run when the wasm module is instantiated.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    controller::mount();
}
