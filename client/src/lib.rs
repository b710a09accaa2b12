//! Leptos front end for the marketplace admin dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on the server by the `market-admin` host (feature `ssr`) and
//! hydrated in the browser (feature `hydrate`). All dashboard state lives in
//! the `catalog` crate; this crate binds it to signals, renders it and
//! supplies the browser collaborators: HTTP, asset upload and `localStorage`.
//!
//! Browser-only code sits behind `#[cfg(feature = "hydrate")]` and degrades
//! to a no-op on the server so SSR output stays deterministic.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
