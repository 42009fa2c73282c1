//! Edge cases integration tests for the OT engine.
//!
//! These tests verify the robustness of the engine under boundary values,
//! error conditions, unicode content, and stress scenarios.

use text_ot::{Component, OtError, TextOperation, transform};

#[test]
fn test_builder_noop_policy() {
    // Zero counts and empty inserts are silently dropped, not errors
    let op = TextOperation::new()
        .retain(0)
        .insert("")
        .delete(0)
        .retain(2)
        .delete(0);

    assert_eq!(op.components(), &[Component::Retain { count: 2 }]);
}

#[test]
fn test_apply_to_empty_text() {
    let op = TextOperation::new().insert("hello");
    assert_eq!(op.apply("").unwrap(), "hello");

    // Any retain or delete against empty text over-runs it
    let op = TextOperation::new().retain(1);
    assert!(op.apply("").is_err());
    let op = TextOperation::new().delete(1);
    assert!(op.invert("").is_err());
}

#[test]
fn test_delete_entire_text() {
    let text = "abcdef";
    let op = TextOperation::new().delete(6);
    assert_eq!(op.apply(text).unwrap(), "");

    let undo = op.invert(text).unwrap();
    assert_eq!(undo.apply("").unwrap(), text);
}

#[test]
fn test_out_of_range_reports_counts() {
    let op = TextOperation::new().retain(3).delete(4);
    match op.apply("abcde") {
        Err(OtError::OutOfRange { needed, available }) => {
            assert_eq!(needed, 7);
            assert_eq!(available, 5);
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn test_unicode_content() {
    // Counts are chars, so multi-byte scalars behave like ASCII
    let text = "中文🦀编程∑";
    let op = TextOperation::new().retain(2).delete(1).insert("🌟");
    assert_eq!(op.apply(text).unwrap(), "中文🌟编程∑");

    let undo = op.invert(text).unwrap();
    assert_eq!(undo.apply("中文🌟编程∑").unwrap(), text);
}

#[test]
fn test_transform_unicode_inserts() {
    let text = "中文";
    let op_a = TextOperation::new().insert("🦀").retain(2);
    let op_b = TextOperation::new().retain(1).insert("∑").retain(1);

    let (a_prime, b_prime) = transform(&op_a, &op_b).unwrap();
    let via_a = b_prime.apply(&op_a.apply(text).unwrap()).unwrap();
    let via_b = a_prime.apply(&op_b.apply(text).unwrap()).unwrap();

    assert_eq!(via_a, via_b);
    assert_eq!(via_a, "🦀中∑文");
}

#[test]
fn test_transform_both_delete_everything() {
    let text = "abc";
    let op_a = TextOperation::new().delete(3);
    let op_b = TextOperation::new().delete(3);

    let (a_prime, b_prime) = transform(&op_a, &op_b).unwrap();
    assert!(a_prime.is_noop());
    assert!(b_prime.is_noop());

    let via_a = b_prime.apply(&op_a.apply(text).unwrap()).unwrap();
    let via_b = a_prime.apply(&op_b.apply(text).unwrap()).unwrap();
    assert_eq!(via_a, "");
    assert_eq!(via_b, "");
}

#[test]
fn test_transform_insert_at_same_position() {
    // Both insert at position 0; A's text comes first by the fixed tie-break
    let text = "base";
    let op_a = TextOperation::new().insert("aaa").retain(4);
    let op_b = TextOperation::new().insert("bbb").retain(4);

    let (a_prime, b_prime) = transform(&op_a, &op_b).unwrap();
    let via_a = b_prime.apply(&op_a.apply(text).unwrap()).unwrap();
    let via_b = a_prime.apply(&op_b.apply(text).unwrap()).unwrap();

    assert_eq!(via_a, via_b);
    assert_eq!(via_a, "aaabbbbase");
}

#[test]
fn test_transform_mismatched_bases_rejected() {
    // Coverage 5 vs coverage 3: these cannot describe edits of one text
    let op_a = TextOperation::new().retain(5);
    let op_b = TextOperation::new().delete(3);
    assert_eq!(transform(&op_a, &op_b), Err(OtError::UnhandledTransformCase));
}

#[test]
fn test_many_small_components() {
    // Stress: a long alternation of single-char edits on both sides
    let size = 1_000usize;
    let text: String = "ab".repeat(size);

    let mut op_a = TextOperation::new();
    let mut op_b = TextOperation::new();
    for _ in 0..size {
        op_a = op_a.retain(1).delete(1);
        op_b = op_b.delete(1).retain(1);
    }

    let (a_prime, b_prime) = transform(&op_a, &op_b).unwrap();
    let via_a = b_prime.apply(&op_a.apply(&text).unwrap()).unwrap();
    let via_b = a_prime.apply(&op_b.apply(&text).unwrap()).unwrap();

    // Each pair "ab" loses both characters, one to each side
    assert_eq!(via_a, via_b);
    assert_eq!(via_a, "");
}

#[test]
fn test_long_document_apply_and_invert() {
    let size = 10_000usize;
    let text: String = (0..size)
        .map(|i| char::from_u32(65 + (i % 26) as u32).unwrap())
        .collect();

    let op = TextOperation::new()
        .retain(size / 2)
        .insert("MIDDLE")
        .delete(size / 2);

    let edited = op.apply(&text).unwrap();
    assert_eq!(edited.chars().count(), size / 2 + 6);

    let undo = op.invert(&text).unwrap();
    assert_eq!(undo.apply(&edited).unwrap(), text);
}

#[test]
fn test_wire_format_from_peer() {
    // A component list as a remote peer would send it, zero-count noise
    // included
    let json = r#"[
        {"type":"retain","count":6},
        {"type":"retain","count":0},
        {"type":"insert","value":"beautiful "},
        {"type":"delete","count":0}
    ]"#;

    let op: TextOperation = serde_json::from_str(json).unwrap();
    assert_eq!(op.components().len(), 2);
    assert_eq!(op.apply("Hello world!").unwrap(), "Hello beautiful world!");
}

#[test]
fn test_unknown_component_kind_rejected() {
    let json = r#"[{"type":"replace","count":1}]"#;
    assert!(serde_json::from_str::<TextOperation>(json).is_err());
}
