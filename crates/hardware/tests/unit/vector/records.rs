//! Vector Record Tests

use alu8_core::alu::FlagSet;
use alu8_core::vector::{ExpectedFlags, FlagMismatch, TestVector};
use pretty_assertions::assert_eq;

#[test]
fn deserializes_the_file_layout() {
    let vector: TestVector = serde_json::from_value(serde_json::json!({
        "test_name": "ADD_7F_01",
        "opcode": "00000",
        "A": 127,
        "B": 1,
        "expected_result": 128,
        "expected_flags": {"carry": false, "overflow": true}
    }))
    .unwrap();
    assert_eq!(vector.test_name, "ADD_7F_01");
    assert_eq!(vector.opcode.as_deref(), Some("00000"));
    assert_eq!(vector.operation, None);
    assert_eq!((vector.a, vector.b, vector.expected_result), (127, 1, 128));
    assert_eq!(vector.expected_flags.carry, Some(false));
    assert_eq!(vector.expected_flags.zero, None);
    assert_eq!(vector.expected_flags.overflow, Some(true));
    assert_eq!(vector.width, None);
    assert_eq!(vector.source, None);
}

#[test]
fn missing_name_and_flags_take_defaults() {
    let vector: TestVector =
        serde_json::from_str(r#"{"operation": "XOR", "A": 1, "B": 2, "expected_result": 3}"#)
            .unwrap();
    assert_eq!(vector.test_name, "unnamed");
    assert!(vector.expected_flags.is_empty());
    assert_eq!(vector.identifier(), "XOR");
}

#[test]
fn serialization_omits_absent_fields() {
    let vector: TestVector =
        serde_json::from_str(r#"{"test_name": "t", "opcode": "00010", "A": 1, "B": 0, "expected_result": 2}"#)
            .unwrap();
    let json = serde_json::to_value(&vector).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "test_name": "t",
            "opcode": "00010",
            "A": 1,
            "B": 0,
            "expected_result": 2,
            "expected_flags": {}
        })
    );
}

#[test]
fn mismatches_skip_unchecked_flags() {
    let expected = ExpectedFlags {
        carry: Some(true),
        zero: None,
        negative: Some(false),
        overflow: Some(false),
    };
    let actual = FlagSet {
        carry: false,
        zero: true,
        negative: false,
        overflow: true,
    };
    assert_eq!(
        expected.mismatches(&actual),
        vec![
            FlagMismatch {
                flag: "carry",
                expected: true,
                actual: false
            },
            FlagMismatch {
                flag: "overflow",
                expected: false,
                actual: true
            },
        ]
    );
    assert!(ExpectedFlags::default().mismatches(&actual).is_empty());
}

#[test]
fn full_expectation_from_flag_set_matches_itself() {
    let actual = FlagSet {
        carry: true,
        zero: true,
        negative: false,
        overflow: false,
    };
    let expected = ExpectedFlags::from(actual);
    assert!(!expected.is_empty());
    assert!(expected.mismatches(&actual).is_empty());
}
