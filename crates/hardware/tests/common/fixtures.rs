//! Vector fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use alu8_core::vector::{ExpectedFlags, TestVector};
use serde_json::Value;

/// A vector addressed by symbolic operation name, with no flag expectations.
pub fn named(test_name: &str, operation: &str, a: i64, b: i64, expected: i64) -> TestVector {
    TestVector {
        test_name: test_name.to_string(),
        opcode: None,
        operation: Some(operation.to_string()),
        a,
        b,
        expected_result: expected,
        expected_flags: ExpectedFlags::default(),
        width: None,
        source: None,
    }
}

/// A vector addressed by opcode string, with no flag expectations.
pub fn coded(test_name: &str, opcode: &str, a: i64, b: i64, expected: i64) -> TestVector {
    TestVector {
        opcode: Some(opcode.to_string()),
        operation: None,
        ..named(test_name, "", a, b, expected)
    }
}

/// Full flag expectation.
pub const fn flags(carry: bool, zero: bool, negative: bool, overflow: bool) -> ExpectedFlags {
    ExpectedFlags {
        carry: Some(carry),
        zero: Some(zero),
        negative: Some(negative),
        overflow: Some(overflow),
    }
}

/// One JSON vector entry as it would appear in a file.
pub fn entry(name: &str, opcode: &str, a: u32, b: u32, expected: u32) -> Value {
    serde_json::json!({
        "test_name": name,
        "opcode": opcode,
        "A": a,
        "B": b,
        "expected_result": expected,
        "expected_flags": {}
    })
}

/// Writes `value` as pretty JSON to `dir/name` and returns the path.
pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

/// Installs a test-writer subscriber so library events show up in failing tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("alu8_core=trace")
        .try_init();
}
