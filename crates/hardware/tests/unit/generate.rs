//! Vector Generation Tests
//!
//! Generated vectors carry golden-model expectations, so every one of them
//! must pass when fed back through the runner.

use alu8_core::common::{AluError, Width};
use alu8_core::config::HarnessConfig;
use alu8_core::generate::{self, corner_operands, vector_name};
use alu8_core::harness::VectorRunner;
use alu8_core::isa::Operation;
use alu8_core::vector::VectorDocument;
use alu8_core::vector::loader::{self, LoadOptions};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn width(bits: u32) -> Width {
    Width::new(bits).unwrap()
}

// ─── Operands and names ──────────────────────────────────────────────────────

#[test]
fn corner_operands_per_width() {
    assert_eq!(
        corner_operands(Width::W8),
        [0x00, 0x01, 0x55, 0x7F, 0x80, 0xAA, 0xFF]
    );
    assert_eq!(corner_operands(width(4)), [0x0, 0x1, 0x5, 0x7, 0x8, 0xA, 0xF]);
    assert_eq!(corner_operands(width(1)), [0, 1]);
}

#[test]
fn names_use_padded_hex_operands() {
    assert_eq!(vector_name(Operation::Add, 0x7F, 0x01, Width::W8), "ADD_7F_01");
    assert_eq!(vector_name(Operation::NotA, 0xA, 0, width(4)), "NOT_A_A_0");
    assert_eq!(vector_name(Operation::Sub, 1, 2, width(16)), "SUB_0001_0002");
}

#[test]
fn generated_vector_expectations_come_from_the_engine() {
    let vector = generate::vector_for(Operation::Add, 0x7F, 0x01, Width::W8);
    assert_eq!(vector.opcode.as_deref(), Some("00000"));
    assert_eq!(vector.expected_result, 0x80);
    assert_eq!(vector.expected_flags.overflow, Some(true));
    assert_eq!(vector.expected_flags.carry, Some(false));
    assert_eq!(vector.width, None);
    assert_eq!(generate::vector_for(Operation::Add, 1, 1, width(4)).width, Some(4));
}

// ─── Boundary sets ───────────────────────────────────────────────────────────

#[test]
fn boundary_set_crosses_corners_and_pins_unused_b() {
    let vectors = generate::boundary_vectors(Width::W8);
    let binary = Operation::ALL.iter().filter(|op| op.uses_b()).count();
    let unary = Operation::ALL.len() - binary;
    assert_eq!(vectors.len(), binary * 49 + unary * 7);

    for v in vectors.iter().filter(|v| v.opcode.as_deref() == Some("00010")) {
        assert_eq!(v.b, 0, "{}", v.test_name);
    }
}

#[test]
fn operation_filter_selects_boundary_vectors() {
    let only_cmp = generate::generate(&[Operation::Cmp], Width::W8, false).unwrap();
    assert_eq!(only_cmp.len(), 49);
    assert!(only_cmp.iter().all(|v| v.test_name.starts_with("CMP_")));

    let all = generate::generate(&[], Width::W8, false).unwrap();
    assert_eq!(all.len(), generate::boundary_vectors(Width::W8).len());
}

// ─── Exhaustive sweeps ───────────────────────────────────────────────────────

#[test]
fn exhaustive_sweep_sizes() {
    assert_eq!(generate::exhaustive_vectors(Operation::Xor, Width::W8).unwrap().len(), 65_536);
    assert_eq!(generate::exhaustive_vectors(Operation::Lsl, Width::W8).unwrap().len(), 256);
    assert_eq!(generate::exhaustive_vectors(Operation::Add, width(4)).unwrap().len(), 256);
}

#[test]
fn exhaustive_sweep_refuses_wide_datapaths() {
    assert_eq!(
        generate::exhaustive_vectors(Operation::Add, width(13)).unwrap_err(),
        AluError::ExhaustiveWidth { width: 13, max: 12 }
    );
    assert!(generate::generate(&[Operation::IncA], width(16), true).is_err());
    assert!(generate::generate(&[], width(16), false).is_ok());
}

// ─── Round trip through the runner ───────────────────────────────────────────

#[test]
fn generated_documents_pass_the_golden_model() {
    let dir = tempdir().unwrap();
    for bits in [8, 4, 16] {
        let document = VectorDocument {
            tests: generate::generate(&[], width(bits), false).unwrap(),
        };
        let path = dir.path().join(format!("boundary_{bits}.json"));
        generate::write_document(&document, &path).unwrap();

        let loaded = loader::load_vectors(&path, LoadOptions::default()).unwrap();
        assert_eq!(loaded.len(), document.tests.len());

        let results = VectorRunner::golden(&HarnessConfig::default()).run(&loaded);
        let failures: Vec<&str> = results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| r.message.as_str())
            .collect();
        assert!(failures.is_empty(), "{bits}-bit: {failures:?}");
    }
}

#[test]
fn exhaustive_nibble_sweep_passes_for_every_operation() {
    let vectors = generate::generate(&[], width(4), true).unwrap();
    let results = VectorRunner::golden(&HarnessConfig::default()).run(&vectors);
    assert!(results.iter().all(|r| r.passed));
}
