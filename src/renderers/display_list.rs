//! Display List for the annotated line view
//!
//! This module defines the output structure returned from the renderer to
//! JavaScript. The DisplayList contains all pre-computed line records (line
//! number, overlay indent, annotatable flag) needed for the host to render
//! DOM rows and comment inputs without any layout decisions of its own.

use serde::{Deserialize, Serialize};

use crate::models::AnnotationSlot;

/// Spacing units of extra indentation added per nesting level
const INDENT_UNITS_PER_LEVEL: usize = 4;

/// A single rendered line of the canonical document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderLine {
    /// 1-based line number in the canonical text
    pub line_number: usize,

    /// Line text exactly as it appears in the canonical document (the
    /// canonical indentation is part of the text)
    pub text: String,

    /// Display-only extra indentation in spacing units, layered on top of
    /// the canonical indentation
    pub indent: usize,

    /// Whether this line accepts a free-text annotation
    pub annotatable: bool,
}

/// Top-level display list handed to the host
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayList {
    /// All lines to render, in document order
    pub lines: Vec<RenderLine>,

    /// Annotation slots, one per annotatable line, in line-number order
    pub slots: Vec<AnnotationSlot>,
}

fn has_open(line: &str) -> bool {
    line.contains('{') || line.contains('[')
}

fn has_close(line: &str) -> bool {
    line.contains('}') || line.contains(']')
}

/// A line is annotatable unless its trimmed content consists entirely of
/// bracket characters. The empty trimmed line is vacuously all-bracket and
/// therefore non-annotatable.
pub fn is_annotatable(line: &str) -> bool {
    !line
        .trim()
        .chars()
        .all(|c| matches!(c, '{' | '}' | '[' | ']'))
}

/// Walk canonical text and produce the ordered line records.
///
/// The nesting counter only looks at the presence of bracket characters per
/// line: a line with a closer and no opener decrements it before that line's
/// indent is computed, a line with an opener and no closer increments it
/// after, and a line with both or neither leaves it unchanged. The counter is
/// signed and can go negative on unbalanced input. Saved documents depend on
/// this exact stepwise behavior, including its misfires on bracket characters
/// inside string literals.
pub fn render_lines(canonical: &str) -> Vec<RenderLine> {
    if canonical.is_empty() {
        return Vec::new();
    }

    let mut records = Vec::new();
    let mut open_count: i32 = 0;

    for (index, line) in canonical.split('\n').enumerate() {
        if has_close(line) && !has_open(line) {
            open_count -= 1;
        }
        let indent = if open_count > 0 {
            open_count as usize * INDENT_UNITS_PER_LEVEL
        } else {
            0
        };
        records.push(RenderLine {
            line_number: index + 1,
            text: line.to_string(),
            indent,
            annotatable: is_annotatable(line),
        });
        if has_open(line) && !has_close(line) {
            open_count += 1;
        }
    }

    records
}

/// Derive fresh, empty annotation slots for the annotatable lines
pub fn annotation_slots(lines: &[RenderLine]) -> Vec<AnnotationSlot> {
    lines
        .iter()
        .filter(|line| line.annotatable)
        .map(|line| AnnotationSlot::new(line.line_number))
        .collect()
}

/// Build the display list for canonical text plus the current slot values
pub fn render_display_list(canonical: &str, slots: &[AnnotationSlot]) -> DisplayList {
    DisplayList {
        lines: render_lines(canonical),
        slots: slots.to_vec(),
    }
}
