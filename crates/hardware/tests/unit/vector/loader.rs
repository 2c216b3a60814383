//! Vector Loader Tests
//!
//! Discovery order, both top-level layouts, and how each class of bad file
//! is reported.

use std::fs;

use alu8_core::common::VectorError;
use alu8_core::vector::loader::{self, LoadOptions};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::tempdir;

use crate::common::fixtures::{entry, write_json};

const NO_SCHEMA: LoadOptions = LoadOptions {
    validate_schema: false,
};

// ─── Discovery ───────────────────────────────────────────────────────────────

#[test]
fn discovers_json_files_sorted() {
    let dir = tempdir().unwrap();
    for name in ["b.json", "a.JSON", "notes.txt", "c.json"] {
        fs::write(dir.path().join(name), "[]").unwrap();
    }
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/d.json"), "[]").unwrap();

    let flat = loader::discover_vector_files(dir.path(), false).unwrap();
    let names: Vec<_> = flat
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.JSON", "b.json", "c.json"]);

    let deep = loader::discover_vector_files(dir.path(), true).unwrap();
    assert_eq!(deep.len(), 4);
    assert!(deep.iter().any(|p| p.ends_with("nested/d.json")));
}

#[test]
fn missing_directory_is_fatal() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent");
    assert!(matches!(
        loader::discover_vector_files(&missing, false),
        Err(VectorError::MissingDirectory(path)) if path == missing
    ));
}

// ─── Layouts ─────────────────────────────────────────────────────────────────

#[test]
fn loads_bare_array_and_tests_object() {
    let dir = tempdir().unwrap();
    let bare = write_json(dir.path(), "bare.json", &json!([entry("t0", "00000", 1, 2, 3)]));
    let wrapped = write_json(
        dir.path(),
        "wrapped.json",
        &json!({"tests": [entry("t1", "00001", 5, 3, 2), entry("t2", "00010", 1, 0, 2)]}),
    );

    let a = loader::load_vectors(&bare, LoadOptions::default()).unwrap();
    assert_eq!(a.len(), 1);
    assert_eq!(a[0].source.as_deref(), Some(bare.as_path()));
    assert_eq!(a[0].file_name(), "bare.json");

    let b = loader::load_vectors(&wrapped, LoadOptions::default()).unwrap();
    assert_eq!(b.iter().map(|v| v.test_name.as_str()).collect::<Vec<_>>(), ["t1", "t2"]);
}

#[test]
fn other_layouts_are_format_errors() {
    let dir = tempdir().unwrap();
    let scalar = write_json(dir.path(), "scalar.json", &json!(42));
    let no_tests = write_json(dir.path(), "object.json", &json!({"vectors": []}));

    assert!(matches!(
        loader::load_vectors(&scalar, NO_SCHEMA),
        Err(VectorError::Format { .. })
    ));
    assert!(matches!(
        loader::load_vectors(&no_tests, NO_SCHEMA),
        Err(VectorError::Format { .. })
    ));
}

// ─── Bad files ───────────────────────────────────────────────────────────────

#[test]
fn invalid_json_is_reported_with_its_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{").unwrap();
    match loader::load_vectors(&path, NO_SCHEMA) {
        Err(VectorError::Json { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected JSON error, got {other:?}"),
    }
}

#[test]
fn schema_violations_block_loading_when_enabled() {
    let dir = tempdir().unwrap();
    let path = write_json(
        dir.path(),
        "bad.json",
        &json!([{"test_name": "t", "opcode": "00000", "A": -3, "B": 0, "expected_result": 0, "expected_flags": {}}]),
    );
    match loader::load_vectors(&path, LoadOptions::default()) {
        Err(VectorError::Schema { violations, .. }) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].pointer, "/0/A");
        }
        other => panic!("expected schema error, got {other:?}"),
    }

    // Without validation the negative operand is left for the oracle.
    let vectors = loader::load_vectors(&path, NO_SCHEMA).unwrap();
    assert_eq!(vectors[0].a, -3);
}

#[test]
fn vectors_that_fail_only_at_evaluation_still_load() {
    let dir = tempdir().unwrap();
    let mut unknown = entry("mul", "00000", 1, 1, 1);
    unknown["operation"] = json!("MUL");
    let path = write_json(
        dir.path(),
        "mixed.json",
        &json!([entry("wide", "00000", 300, 0, 300), entry("unassigned", "11111", 0, 0, 0), unknown]),
    );
    let vectors = loader::load_vectors(&path, LoadOptions::default()).unwrap();
    assert_eq!(vectors.len(), 3);
}

#[test]
fn unreadable_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert!(matches!(
        loader::load_vectors(&path, NO_SCHEMA),
        Err(VectorError::Io { .. })
    ));
}
