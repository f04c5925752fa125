//! JSON Annotator WASM API
//!
//! This module provides the JavaScript-facing API for the annotator. It
//! includes shared utilities for serialization, error handling, and logging,
//! plus the exported operations: document input, annotation edits, and
//! snapshot save/load.

pub mod core;
pub mod helpers;

// Re-export all public functions to maintain a flat API surface
pub use core::{
    get_display_list, load_document, load_example_document, restore_last_saved_snapshot,
    save_document, save_file_name, save_mime_type, set_annotation, set_document_text,
};
