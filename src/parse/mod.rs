//! JSON parser adapter
//!
//! The annotator never renders or persists the user's raw input directly.
//! This module turns raw text into canonical form: parse with serde_json,
//! then re-serialize with a fixed 2-space indent. Canonical text is the unit
//! every line number refers to.
//!
//! serde_json is built with `preserve_order`, so canonical text keeps the
//! author's key order and line numbers stay stable across save/reload.

use serde::Serialize;
use thiserror::Error;

/// Indent width of canonical text, in spaces per nesting level
pub const CANONICAL_INDENT_WIDTH: usize = 2;

/// Raw text does not conform to JSON syntax
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The message shown in place of the rendered view
    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),
}

/// Parse raw text and re-serialize it with the fixed canonical indent.
///
/// Fails with [`ParseError`] on any input serde_json rejects; the caller
/// decides whether that blanks the view (input change) or aborts the
/// operation (save).
pub fn canonicalize(text: &str) -> Result<String, ParseError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ParseError::InvalidJson(e.to_string()))?;
    serialize_canonical(&value)
}

/// Serialize a parsed value with the canonical indent width
fn serialize_canonical(value: &serde_json::Value) -> Result<String, ParseError> {
    let indent = vec![b' '; CANONICAL_INDENT_WIDTH];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|e| ParseError::InvalidJson(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| ParseError::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_reindents_with_two_spaces() {
        let canonical = canonicalize("{\"a\":1}").expect("valid input");
        assert_eq!(canonical, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let once = canonicalize(r#"{"a": [1, 2, {"b": null}], "c": "x"}"#).unwrap();
        let twice = canonicalize(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_canonicalize_preserves_key_order() {
        let canonical = canonicalize(r#"{"zebra": 1, "apple": 2}"#).unwrap();
        let zebra = canonical.find("zebra").unwrap();
        let apple = canonical.find("apple").unwrap();
        assert!(
            zebra < apple,
            "author key order must survive canonicalization"
        );
    }

    #[test]
    fn test_canonicalize_rejects_invalid_input() {
        let err = canonicalize("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON format:"));
    }

    #[test]
    fn test_canonicalize_accepts_scalar_documents() {
        // serde_json parses bare scalars as documents; they canonicalize to
        // a single line with no indentation
        assert_eq!(canonicalize("42").unwrap(), "42");
        assert_eq!(canonicalize("\"hi\"").unwrap(), "\"hi\"");
    }
}
