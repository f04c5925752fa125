//! JSON Annotator WASM Module
//!
//! This is the main WASM module for the JSON Annotator. It parses pasted
//! text as JSON, renders it as an indented, line-numbered view with per-line
//! annotation slots, and persists document plus annotations as a single
//! reloadable snapshot.

pub mod api;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod snapshot;

// Re-export commonly used types
pub use models::core::*;
pub use renderers::display_list::{DisplayList, RenderLine};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("JSON Annotator WASM module initialized");
}
