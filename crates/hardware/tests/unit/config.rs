//! Harness Configuration Tests

use std::path::PathBuf;

use alu8_core::common::{VectorError, Width};
use alu8_core::config::HarnessConfig;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn defaults_match_the_conventional_layout() {
    let config = HarnessConfig::default();
    assert_eq!(config.vectors_dir, PathBuf::from("test/vectors"));
    assert_eq!(config.output_dir, PathBuf::from("results"));
    assert_eq!(config.default_width, Width::W8);
    assert!(config.validate_schema && config.sort_by_opcode);
    assert!(!config.recursive);
    assert!(config.exports());
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let config = HarnessConfig::from_json_str(
        r#"{ "vectors_dir": "vectors/alu", "default_width": 16, "write_csv": false }"#,
    )
    .unwrap();
    assert_eq!(config.vectors_dir, PathBuf::from("vectors/alu"));
    assert_eq!(config.default_width, Width::new(16).unwrap());
    assert!(!config.write_csv);
    assert!(config.write_json);
    assert_eq!(config.output_dir, PathBuf::from("results"));
}

#[test]
fn empty_object_is_the_default() {
    assert_eq!(HarnessConfig::from_json_str("{}").unwrap(), HarnessConfig::default());
}

#[test]
fn out_of_range_width_is_rejected() {
    assert!(HarnessConfig::from_json_str(r#"{ "default_width": 0 }"#).is_err());
    assert!(HarnessConfig::from_json_str(r#"{ "default_width": 33 }"#).is_err());
}

#[test]
fn exports_disabled_when_both_writers_are_off() {
    let config = HarnessConfig {
        write_json: false,
        write_csv: false,
        ..HarnessConfig::default()
    };
    assert!(!config.exports());
}

#[test]
fn from_file_reports_path_on_error() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("harness.json");
    std::fs::write(&good, r#"{ "recursive": true }"#).unwrap();
    assert!(HarnessConfig::from_file(&good).unwrap().recursive);

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "recursive = true").unwrap();
    match HarnessConfig::from_file(&bad) {
        Err(VectorError::Json { path, .. }) => assert_eq!(path, bad),
        other => panic!("expected JSON error, got {other:?}"),
    }

    assert!(matches!(
        HarnessConfig::from_file(&dir.path().join("absent.json")),
        Err(VectorError::Io { .. })
    ));
}

#[test]
fn config_serializes_back_to_json() {
    let json = serde_json::to_value(HarnessConfig::default()).unwrap();
    assert_eq!(json["default_width"], 8);
    assert_eq!(json["output_dir"], "results");
}
