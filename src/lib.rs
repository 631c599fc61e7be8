//! Screenplay Editor WASM Module
//!
//! This is the main WASM module for the screenplay editor. It provides
//! core functionality for line-based screenplay editing: the typed line
//! model, cursor-aware split/merge, range selection, format
//! application, and table-read playback.

pub mod ai;
pub mod api;
pub mod edit;
pub mod format;
pub mod models;
pub mod selection;
pub mod store;
pub mod table_read;
pub mod utils;

// Re-export commonly used types
pub use models::core::*;
pub use models::elements::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Screenplay Editor WASM module initialized");
}
