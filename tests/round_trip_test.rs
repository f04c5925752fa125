// End-to-end snapshot round trip: canonicalize -> render -> annotate ->
// encode -> file -> decode -> render -> re-attach comments

use std::fs;

use annotator_wasm::models::AnnotationSlot;
use annotator_wasm::parse::canonicalize;
use annotator_wasm::renderers::{annotation_slots, render_lines};
use annotator_wasm::snapshot::{apply_comments, decode, encode, FormatError, SAVE_FILE_NAME};

#[test]
fn test_round_trip_reproduces_document_and_comments() {
    let canonical =
        canonicalize(r#"{"name": "demo", "items": [1, 2], "done": false}"#).expect("valid");
    let lines = render_lines(&canonical);
    let mut slots = annotation_slots(&lines);
    for (i, slot) in slots.iter_mut().enumerate() {
        slot.value = format!("note {}", i + 1);
    }

    let blob = encode(&canonical, &slots);
    let decoded = decode(&blob).expect("blob must decode");
    assert_eq!(decoded.document, canonical, "document half must be exact");

    let restored_lines = render_lines(&decoded.document);
    assert_eq!(restored_lines, lines, "reload must reproduce the view");

    let mut restored = annotation_slots(&restored_lines);
    apply_comments(&mut restored, &decoded.comments);
    assert_eq!(restored, slots, "every comment must re-attach to its line");
}

#[test]
fn test_round_trip_through_a_file() {
    let canonical = canonicalize(r#"{"a": 1}"#).expect("valid");
    let lines = render_lines(&canonical);
    let mut slots = annotation_slots(&lines);
    slots[0].value = "checked against upstream".to_string();

    let blob = encode(&canonical, &slots);

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(SAVE_FILE_NAME);
    fs::write(&path, &blob).expect("write snapshot");

    let read_back = fs::read_to_string(&path).expect("read snapshot");
    let decoded = decode(&read_back).expect("decode snapshot");

    let mut restored = annotation_slots(&render_lines(&decoded.document));
    apply_comments(&mut restored, &decoded.comments);
    assert_eq!(restored, slots);
}

#[test]
fn test_key_line_comment_survives_reload() {
    // {"a":1} canonicalizes to three lines; line 1 is "{" (non-annotatable),
    // line 2 carries the key
    let canonical = canonicalize("{\"a\":1}").expect("valid");
    let lines = render_lines(&canonical);
    assert!(!lines[0].annotatable);
    assert!(lines[1].annotatable);

    let mut slots = annotation_slots(&lines);
    assert_eq!(
        slots,
        vec![AnnotationSlot {
            line_number: 2,
            value: String::new(),
        }]
    );
    slots[0].value = "note".to_string();

    let decoded = decode(&encode(&canonical, &slots)).expect("decode");
    let mut restored = annotation_slots(&render_lines(&decoded.document));
    apply_comments(&mut restored, &decoded.comments);

    assert_eq!(restored[0].line_number, 2);
    assert_eq!(restored[0].value, "note");
}

#[test]
fn test_save_never_emits_comments_for_bracket_only_lines() {
    let canonical = canonicalize(r#"{"a": 1}"#).expect("valid");
    let lines = render_lines(&canonical);
    let mut slots = annotation_slots(&lines);
    for slot in slots.iter_mut() {
        slot.value = "annotated".to_string();
    }

    let blob = encode(&canonical, &slots);
    // lines 1 ("{") and 3 ("}") have no slots, so no comment can name them
    assert!(!blob.contains("Line 1:"));
    assert!(!blob.contains("Line 3:"));
    assert!(blob.contains("Line 2: annotated"));
}

#[test]
fn test_canonicalize_idempotence() {
    let once = canonicalize(r#"{"a": [1, {"b": 2}], "c": null}"#).expect("valid");
    assert_eq!(canonicalize(&once).expect("valid"), once);
}

#[test]
fn test_separator_collision_is_a_format_error() {
    let canonical = canonicalize(r#"{"note": "a -- b"}"#).expect("valid");
    let blob = encode(&canonical, &[]);

    // the document half itself contains "--", so the split yields three
    // segments and the load must be rejected rather than misparsed
    assert!(matches!(
        decode(&blob),
        Err(FormatError::BadSegmentCount { found: 3 })
    ));
}

#[test]
fn test_blob_without_separator_is_a_format_error() {
    assert!(matches!(
        decode("{\n  \"a\": 1\n}"),
        Err(FormatError::BadSegmentCount { found: 1 })
    ));
}
