//! Data models for the JSON Annotator
//!
//! This module defines the session state owned by the API layer and the
//! annotation slot structure shared with the renderer and snapshot codec.

pub mod core;

// Re-export commonly used types
pub use core::{AnnotationSlot, Session, EXAMPLE_DOCUMENT};
