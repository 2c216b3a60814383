//! Result Export Tests
//!
//! CSV layout, JSON record shape, and directory export driven by the harness
//! configuration.

use std::fs;

use alu8_core::config::HarnessConfig;
use alu8_core::export::{self, CSV_HEADER, RESULTS_CSV, RESULTS_JSON};
use alu8_core::harness::{TestResult, VectorRunner};
use alu8_core::vector::TestVector;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::tempdir;

use crate::common::fixtures::{flags, named};

fn sample() -> Vec<TestResult> {
    VectorRunner::golden(&HarnessConfig::default()).run(&[
        TestVector {
            expected_flags: flags(false, false, true, true),
            ..named("add_ovf", "ADD", 0x7F, 1, 0x80)
        },
        named("bad, really", "SUB", 1, 1, 1),
        named("ghost", "MUL", 0, 0, 0),
    ])
}

// ─── CSV ─────────────────────────────────────────────────────────────────────

#[test]
fn csv_has_header_and_one_row_per_result() {
    let results = sample();
    let csv = export::to_csv_string(&results);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], CSV_HEADER.join(","));
    assert_eq!(
        lines[1],
        ",add_ovf,ADD,true,128,128,C=0 Z=0 N=1 V=1,C=0 Z=0 N=1 V=1,pass"
    );
    assert_eq!(
        lines[2],
        ",\"bad, really\",SUB,false,1,0,C=- Z=- N=- V=-,C=1 Z=1 N=0 V=0,mismatch: result expected 1 got 0"
    );
}

#[test]
fn csv_leaves_actual_cells_empty_after_errors() {
    let results = sample();
    let csv = export::to_csv_string(&results);
    let last = csv.lines().last().unwrap();
    assert_eq!(
        last,
        ",ghost,MUL,false,0,,C=- Z=- N=- V=-,,error: unsupported operation 'MUL'"
    );
}

#[test]
fn empty_result_set_renders_empty_csv() {
    assert_eq!(export::to_csv_string(&Vec::<TestResult>::new()), "");
}

// ─── JSON ────────────────────────────────────────────────────────────────────

#[test]
fn json_records_use_null_for_missing_outputs() {
    let results = sample();
    let json: Value = serde_json::from_str(&export::to_json_string(&results).unwrap()).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["actual_flags"]["overflow"], true);
    assert_eq!(records[2]["actual_result"], Value::Null);
    assert_eq!(records[2]["actual_flags"], Value::Null);
    assert!(records[2].get("resolved").is_none());
    assert_eq!(records[1]["expected_flags"], serde_json::json!({}));
}

#[test]
fn json_records_round_trip() {
    let results = sample();
    let raw = export::to_json_string(&results).unwrap();
    let back: Vec<TestResult> = serde_json::from_str(&raw).unwrap();
    assert_eq!(back[0].message, "pass");
    assert_eq!(back[0].resolved, None);
    assert_eq!(back.len(), results.len());
}

// ─── Directory export ────────────────────────────────────────────────────────

#[test]
fn writes_enabled_exports_into_output_dir() {
    let dir = tempdir().unwrap();
    let config = HarnessConfig {
        output_dir: dir.path().join("nested").join("results"),
        ..HarnessConfig::default()
    };
    let results = sample();
    let refs: Vec<&TestResult> = results.iter().collect();
    let written = export::write_results(&refs, &config).unwrap();
    assert_eq!(
        written,
        [config.output_dir.join(RESULTS_JSON), config.output_dir.join(RESULTS_CSV)]
    );
    let csv = fs::read_to_string(&written[1]).unwrap();
    assert!(csv.starts_with("vector_file,test_name,operation,passed,"));
}

#[test]
fn disabled_exports_are_not_written() {
    let dir = tempdir().unwrap();
    let config = HarnessConfig {
        output_dir: dir.path().to_path_buf(),
        write_json: false,
        ..HarnessConfig::default()
    };
    let written = export::write_results(&[], &config).unwrap();
    assert_eq!(written, [dir.path().join(RESULTS_CSV)]);
    assert!(!dir.path().join(RESULTS_JSON).exists());
    assert_eq!(fs::read_to_string(&written[0]).unwrap(), "");
}
