//! Flag Policy Tests
//!
//! Direct checks of the flag derivation functions and the `FlagSet` helpers,
//! independent of any particular operation.

use alu8_core::alu::FlagSet;
use alu8_core::alu::flags;
use alu8_core::common::Width;
use pretty_assertions::assert_eq;

const W8: Width = Width::W8;

// ─── Result flags ────────────────────────────────────────────────────────────

#[test]
fn zero_and_negative_use_the_masked_result() {
    assert!(flags::zero(0, W8));
    assert!(flags::zero(256, W8));
    assert!(!flags::zero(-256 + 1, W8));
    assert!(flags::negative(-1, W8));
    assert!(flags::negative(0x80, W8));
    assert!(!flags::negative(0x17F, W8));
}

// ─── Carry ───────────────────────────────────────────────────────────────────

#[test]
fn add_carry_is_unsigned_overflow_past_the_width() {
    assert!(!flags::add_carry(255, W8));
    assert!(flags::add_carry(256, W8));
}

#[test]
fn subtract_carry_means_no_borrow() {
    assert!(flags::sub_carry(5, 5));
    assert!(flags::sub_carry(6, 5));
    assert!(!flags::sub_carry(4, 5));
    assert!(flags::dec_carry(1));
    assert!(!flags::dec_carry(0));
}

// ─── Overflow ────────────────────────────────────────────────────────────────

#[test]
fn add_overflow_requires_equal_operand_signs() {
    assert!(flags::add_overflow(0x7F, 0x01, 0x80, W8));
    assert!(flags::add_overflow(0x80, 0x80, 0x100, W8));
    assert!(!flags::add_overflow(0x7F, 0x80, 0xFF, W8));
}

#[test]
fn sub_overflow_requires_differing_operand_signs() {
    assert!(flags::sub_overflow(0x80, 0x01, 0x7F, W8));
    assert!(flags::sub_overflow(0x7F, 0xFF, 0x7F - 0xFF, W8));
    assert!(!flags::sub_overflow(0x03, 0x0A, 0x03 - 0x0A, W8));
}

#[test]
fn inc_and_dec_overflow_at_signed_limits() {
    assert!(flags::inc_overflow(0x7F, W8));
    assert!(!flags::inc_overflow(0xFF, W8));
    assert!(flags::dec_overflow(0x80, W8));
    assert!(!flags::dec_overflow(0x00, W8));
}

// ─── FlagSet helpers ─────────────────────────────────────────────────────────

#[test]
fn flag_lookup_by_name() {
    let set = FlagSet {
        carry: true,
        zero: false,
        negative: true,
        overflow: false,
    };
    assert_eq!(set.get("carry"), Some(true));
    assert_eq!(set.get("zero"), Some(false));
    assert_eq!(set.get("negative"), Some(true));
    assert_eq!(set.get("overflow"), Some(false));
    assert_eq!(set.get("parity"), None);
    assert_eq!(set.to_nzcv(), 0b1010);
    assert_eq!(set.to_string(), "C=1 Z=0 N=1 V=0");
}

#[test]
fn non_arithmetic_constructors_clear_overflow() {
    let out = FlagSet::from_result(0, W8);
    assert_eq!(out, FlagSet { zero: true, ..FlagSet::default() });

    let shifted = FlagSet::shifted(0x80, W8, true);
    assert!(shifted.carry && shifted.negative && !shifted.overflow);
}

#[test]
fn flag_set_serializes_with_lowercase_names() {
    let json = serde_json::to_value(FlagSet::from_raw(0x100, W8, true, false)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"carry": true, "zero": true, "negative": false, "overflow": false})
    );
}
