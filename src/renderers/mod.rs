//! Renderers for the JSON Annotator
//!
//! This module contains the annotation renderer: the logic that converts
//! canonical document text into the line-oriented display list consumed by
//! the host.

pub mod display_list;

// Re-export commonly used types
pub use display_list::{
    annotation_slots, is_annotatable, render_display_list, render_lines, DisplayList, RenderLine,
};
