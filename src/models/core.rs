//! Core data structures for the JSON Annotator
//!
//! This module defines the session-scoped state holder that owns the live
//! document and its annotation set. Exactly one document is live at a time;
//! every input event or file load replaces the whole state at a well-defined
//! event boundary.

use serde::{Deserialize, Serialize};

/// Fixed example document loaded and rendered at startup (no annotations).
pub const EXAMPLE_DOCUMENT: &str = r#"{"glossary": {"title": "example glossary","GlossDiv": {"title": "S","GlossList": {"GlossEntry": {"ID": "SGML", "SortAs": "SGML","GlossTerm": "Standard Generalized Markup Language","Acronym": "SGML","GlossDef": {"para": "A meta-markup language, used to create markup languages such as DocBook.","GlossSeeAlso": ["GML", "XML"]},"GlossSee": "markup"}}}}}"#;

/// An editable annotation slot attached to one annotatable line.
///
/// `line_number` is the stable key used by the persistence codec; it is only
/// valid for the canonical text the slot was derived from. Reflowing the
/// document invalidates all existing slots.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnnotationSlot {
    /// 1-based line number in the canonical document text
    pub line_number: usize,

    /// Free-text comment; empty or whitespace-only means "no annotation"
    pub value: String,
}

impl AnnotationSlot {
    /// Create an empty slot for a line
    pub fn new(line_number: usize) -> Self {
        Self {
            line_number,
            value: String::new(),
        }
    }

    /// True if this slot holds a comment worth persisting
    pub fn has_content(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

/// Session-scoped state: the live document and its annotations.
#[derive(Clone, Debug, Default)]
pub struct Session {
    /// Document text exactly as typed or loaded
    pub raw_text: String,

    /// Parse + re-stringify result; `None` while the raw text is invalid JSON
    pub canonical_text: Option<String>,

    /// Annotation slots in line-number order, one per annotatable line.
    /// Rebuilt empty whenever the canonical text changes; bulk-populated by
    /// the snapshot codec on load.
    pub slots: Vec<AnnotationSlot>,

    /// Blob retained by the most recent successful save
    pub last_saved: Option<String>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document and its slots atomically (input change or load)
    pub fn replace_document(
        &mut self,
        raw_text: String,
        canonical_text: Option<String>,
        slots: Vec<AnnotationSlot>,
    ) {
        self.raw_text = raw_text;
        self.canonical_text = canonical_text;
        self.slots = slots;
    }

    /// Set the comment for one annotatable line.
    ///
    /// Returns false if no slot is tagged with that line number (the line is
    /// non-annotatable or out of range for the current document).
    pub fn set_annotation(&mut self, line_number: usize, value: &str) -> bool {
        match self
            .slots
            .iter_mut()
            .find(|slot| slot.line_number == line_number)
        {
            Some(slot) => {
                slot.value = value.to_string();
                true
            }
            None => false,
        }
    }
}
