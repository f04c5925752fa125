//! Snapshot codec: single-file persistence for document plus annotations
//!
//! The only wire format in the system. A snapshot blob is the canonical
//! document text, a separator line, then one comment line per annotated line:
//!
//! ```text
//! <canonical-document-text>
//! --
//! Line <N>: <comment text>
//! ```
//!
//! Decoding splits on the literal separator substring and requires exactly
//! two segments. A `--` occurring verbatim inside the document or a comment
//! therefore makes the blob undecodable; that fragility is part of the
//! format and is reported as a [`FormatError`] rather than silently
//! repaired.

use thiserror::Error;

use crate::models::AnnotationSlot;

/// Separator between the document text and the comment lines
pub const SEPARATOR: &str = "--";

/// Fixed download name for saved snapshots
pub const SAVE_FILE_NAME: &str = "savedContent.txt";

/// MIME type for saved snapshots
pub const SAVE_MIME_TYPE: &str = "text/plain";

/// Loaded blob does not conform to the snapshot grammar
#[derive(Debug, Clone, Error)]
pub enum FormatError {
    /// Splitting on the separator must give exactly document + comments
    #[error("Invalid file format: expected exactly one '--' separator, found {found} segments")]
    BadSegmentCount {
        /// Segment count the split actually produced
        found: usize,
    },
}

/// Decoded halves of a snapshot blob
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Canonical document text (trimmed)
    pub document: String,

    /// Comments block (trimmed); may contain anything, including no comment
    /// lines at all
    pub comments: String,
}

/// Render the comment lines for every slot with non-empty trimmed content,
/// in slot (line-number) order
pub fn comment_lines(slots: &[AnnotationSlot]) -> Vec<String> {
    slots
        .iter()
        .filter(|slot| slot.has_content())
        .map(|slot| format!("Line {}: {}", slot.line_number, slot.value.trim()))
        .collect()
}

/// Freeze canonical text and annotations into one transportable blob
pub fn encode(canonical: &str, slots: &[AnnotationSlot]) -> String {
    format!(
        "{}\n{}\n{}",
        canonical,
        SEPARATOR,
        comment_lines(slots).join("\n")
    )
}

/// Split a blob into its document and comments halves.
///
/// Valid only if splitting on the literal separator yields exactly two
/// segments; any other count is a [`FormatError`] and the caller must leave
/// its state untouched.
pub fn decode(blob: &str) -> Result<Snapshot, FormatError> {
    let parts: Vec<&str> = blob.split(SEPARATOR).collect();
    if parts.len() != 2 {
        return Err(FormatError::BadSegmentCount { found: parts.len() });
    }
    Ok(Snapshot {
        document: parts[0].trim().to_string(),
        comments: parts[1].trim().to_string(),
    })
}

/// Re-attach decoded comments to freshly regenerated slots.
///
/// For each slot, the first comment-block line containing the literal
/// `Line <n>:` wins (the block may hold duplicates or unrelated text); the
/// slot value becomes everything after that prefix, trimmed. Slots with no
/// matching line stay empty; missing matches are not errors.
pub fn apply_comments(slots: &mut [AnnotationSlot], comments: &str) {
    let lines: Vec<&str> = comments.split('\n').collect();
    for slot in slots.iter_mut() {
        let prefix = format!("Line {}:", slot.line_number);
        if let Some(line) = lines.iter().find(|line| line.contains(&prefix)) {
            if let Some(at) = line.find(&prefix) {
                slot.value = line[at + prefix.len()..].trim().to_string();
            }
        }
    }
}
