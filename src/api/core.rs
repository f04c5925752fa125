//! WASM API for the annotated document view
//!
//! This module provides the JavaScript-facing API: input-change rendering,
//! annotation edits, and snapshot save/load. All document logic lives in the
//! pure core (`parse`, `renderers`, `snapshot`); this layer owns the session
//! state and the JavaScript boundary.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{lock_session, serialize};
use crate::models::{Session, EXAMPLE_DOCUMENT};
use crate::parse::{canonicalize, ParseError};
use crate::renderers::display_list::{
    annotation_slots, render_display_list, render_lines, DisplayList,
};
use crate::snapshot::{self, FormatError};
use crate::{wasm_error, wasm_info, wasm_log};

// ============================================================================
// Document Input
// ============================================================================

/// Replace the document from raw input and rebuild the rendered view.
///
/// On success the session holds the new canonical text with fresh, empty
/// annotation slots and the display list is returned. On a parse failure the
/// raw text still replaces the previous document, the rendered state is
/// cleared (the view blanks to the error message), and the error propagates.
#[wasm_bindgen(js_name = setDocumentText)]
pub fn set_document_text(text: &str) -> Result<JsValue, JsValue> {
    wasm_info!("setDocumentText called: {} bytes", text.len());

    let mut session = lock_session()?;
    let list = apply_document_text(&mut session, text).map_err(|e| {
        wasm_error!("Parse error: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    wasm_info!(
        "  rendered {} lines, {} annotatable",
        list.lines.len(),
        list.slots.len()
    );
    serialize(&list, "Display list serialization error")
}

/// Load and render the fixed example document (startup state)
#[wasm_bindgen(js_name = loadExampleDocument)]
pub fn load_example_document() -> Result<JsValue, JsValue> {
    wasm_info!("loadExampleDocument called");

    let mut session = lock_session()?;
    let list = apply_document_text(&mut session, EXAMPLE_DOCUMENT).map_err(|e| {
        wasm_error!("Example document failed to parse: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    serialize(&list, "Display list serialization error")
}

/// Fetch the current rendered view and annotation slots without mutating
/// state. While the raw text is invalid the list is empty.
#[wasm_bindgen(js_name = getDisplayList)]
pub fn get_display_list() -> Result<JsValue, JsValue> {
    wasm_log!("getDisplayList called");

    let session = lock_session()?;
    let list = match session.canonical_text.as_deref() {
        Some(canonical) => render_display_list(canonical, &session.slots),
        None => DisplayList {
            lines: Vec::new(),
            slots: Vec::new(),
        },
    };

    serialize(&list, "Display list serialization error")
}

// ============================================================================
// Annotation Edits
// ============================================================================

/// Set the comment text for one annotatable line (no validation on content)
#[wasm_bindgen(js_name = setAnnotation)]
pub fn set_annotation(line_number: usize, value: &str) -> Result<(), JsValue> {
    wasm_log!("setAnnotation called for line {}", line_number);

    let mut session = lock_session()?;
    if !session.set_annotation(line_number, value) {
        wasm_error!("No annotation slot for line {}", line_number);
        return Err(JsValue::from_str(&format!(
            "No annotation slot for line {}",
            line_number
        )));
    }
    Ok(())
}

// ============================================================================
// Snapshot Save / Load
// ============================================================================

/// Freeze the current document and annotations into a snapshot blob.
///
/// Canonical text is re-derived from the current raw input; if that input is
/// no longer valid JSON the save aborts with the parse error and no state
/// changes. The returned blob is also retained as the last-saved snapshot.
#[wasm_bindgen(js_name = saveDocument)]
pub fn save_document() -> Result<String, JsValue> {
    wasm_info!("saveDocument called");

    let mut session = lock_session()?;
    let canonical = canonicalize(&session.raw_text).map_err(|e| {
        wasm_error!("Save aborted: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    let blob = snapshot::encode(&canonical, &session.slots);
    session.last_saved = Some(blob.clone());

    wasm_info!("  snapshot encoded: {} bytes", blob.len());
    Ok(blob)
}

/// Fixed download name the host should use for saved snapshots
#[wasm_bindgen(js_name = saveFileName)]
pub fn save_file_name() -> String {
    snapshot::SAVE_FILE_NAME.to_string()
}

/// MIME type the host should use for saved snapshots
#[wasm_bindgen(js_name = saveMimeType)]
pub fn save_mime_type() -> String {
    snapshot::SAVE_MIME_TYPE.to_string()
}

/// Load a snapshot blob (file read result), replacing the session state.
///
/// Fails with a format error, leaving all state untouched, unless the blob
/// splits into exactly a document half and a comments half. The document half
/// is re-rendered and the decoded comments are re-attached to the
/// regenerated slots.
#[wasm_bindgen(js_name = loadDocument)]
pub fn load_document(blob: &str) -> Result<JsValue, JsValue> {
    wasm_info!("loadDocument called: {} bytes", blob.len());

    let mut session = lock_session()?;
    let list = apply_snapshot(&mut session, blob).map_err(|e| {
        wasm_error!("Load aborted: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    wasm_info!(
        "  restored {} lines, {} annotatable",
        list.lines.len(),
        list.slots.len()
    );
    serialize(&list, "Display list serialization error")
}

/// Re-load the snapshot retained by the most recent save, if any.
///
/// Returns `null` when no snapshot has been saved this session; otherwise
/// behaves exactly like `loadDocument` on the retained blob.
#[wasm_bindgen(js_name = restoreLastSavedSnapshot)]
pub fn restore_last_saved_snapshot() -> Result<JsValue, JsValue> {
    wasm_info!("restoreLastSavedSnapshot called");

    let mut session = lock_session()?;
    let blob = match session.last_saved.clone() {
        Some(blob) => blob,
        None => {
            wasm_log!("  no snapshot retained, nothing to restore");
            return Ok(JsValue::NULL);
        }
    };

    let list = apply_snapshot(&mut session, &blob).map_err(|e| {
        wasm_error!("Restore aborted: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    serialize(&list, "Display list serialization error")
}

// ============================================================================
// Internal Functions
// ============================================================================

/// Canonicalize raw input and rebuild the session's rendered state.
///
/// The raw text always replaces the previous document; rendered state
/// survives only when the parse succeeds.
fn apply_document_text(session: &mut Session, text: &str) -> Result<DisplayList, ParseError> {
    match canonicalize(text) {
        Ok(canonical) => {
            let lines = render_lines(&canonical);
            let slots = annotation_slots(&lines);
            session.replace_document(text.to_string(), Some(canonical), slots.clone());
            Ok(DisplayList { lines, slots })
        }
        Err(e) => {
            session.replace_document(text.to_string(), None, Vec::new());
            Err(e)
        }
    }
}

/// Decode a blob and replace the session state with its contents.
///
/// Decoding happens before any mutation so a format error leaves the session
/// exactly as it was. The loaded document half is rendered as-is (the
/// renderer never fails); only save re-parses.
fn apply_snapshot(session: &mut Session, blob: &str) -> Result<DisplayList, FormatError> {
    let decoded = snapshot::decode(blob)?;

    let lines = render_lines(&decoded.document);
    let mut slots = annotation_slots(&lines);
    snapshot::apply_comments(&mut slots, &decoded.comments);

    session.replace_document(
        decoded.document.clone(),
        Some(decoded.document),
        slots.clone(),
    );
    Ok(DisplayList { lines, slots })
}
