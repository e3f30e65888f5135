//! # fanzone
//!
//! WebAssembly interaction layer for the static fan site. The markup already
//! exists when this crate starts; it locates the elements each widget needs,
//! attaches event handlers and timers, and keeps all widget state in Rust.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure widget cores (slider, roster filter, overlays, poll, ...) |
//! | [`components`] | Browser bindings that attach the cores to the document |
//! | [`util`] | HTML escaping and DOM helpers |
//! | [`config`] | Typed timing/threshold settings |
//! | [`error`] | Error types shared by the bindings |
//! | [`consts`] | User-visible strings, class names, selectors |
//! | [`app`] | Bootstrap: attaches every widget whose elements are present |

pub mod app;
pub mod components;
pub mod config;
pub mod consts;
pub mod error;
pub mod state;
pub mod util;

/// WASM entry point, run once the module is instantiated.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("fanzone: logger init failed: {err}").into());
    }
    app::boot();
}
