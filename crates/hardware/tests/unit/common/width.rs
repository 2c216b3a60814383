//! Datapath Width Tests

use alu8_core::common::{AluError, Width};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(1, 0x1, 0x0, 0x1)]
#[case(4, 0xF, 0x7, 0x8)]
#[case(8, 0xFF, 0x7F, 0x80)]
#[case(16, 0xFFFF, 0x7FFF, 0x8000)]
#[case(32, 0xFFFF_FFFF, 0x7FFF_FFFF, 0x8000_0000)]
fn masks_and_signed_limits(
    #[case] bits: u32,
    #[case] mask: u32,
    #[case] signed_max: u32,
    #[case] signed_min: u32,
) {
    let width = Width::new(bits).unwrap();
    assert_eq!(width.bits(), bits);
    assert_eq!(width.mask(), mask);
    assert_eq!(width.signed_max(), signed_max);
    assert_eq!(width.signed_min(), signed_min);
    assert_eq!(width.sign_bit(), signed_min);
}

#[test]
fn rejects_zero_and_oversized_widths() {
    assert_eq!(Width::new(0), Err(AluError::InvalidWidth(0)));
    assert_eq!(Width::new(33), Err(AluError::InvalidWidth(33)));
}

#[test]
fn default_is_eight_bits() {
    assert_eq!(Width::default(), Width::W8);
    assert_eq!(Width::default().to_string(), "8-bit");
}

#[test]
fn truncate_wraps_negative_raw_values() {
    assert_eq!(Width::W8.truncate(-7), 0xF9);
    assert_eq!(Width::W8.truncate(0x1_23), 0x23);
}

#[test]
fn contains_checks_unsigned_range() {
    assert!(Width::W8.contains(0));
    assert!(Width::W8.contains(255));
    assert!(!Width::W8.contains(256));
    assert!(!Width::W8.contains(-1));
}

#[test]
fn signed_view_and_hex_digits() {
    assert_eq!(Width::W8.to_signed(0xFF), -1);
    assert_eq!(Width::W8.to_signed(0x80), -128);
    assert_eq!(Width::W8.to_signed(0x7F), 127);
    assert_eq!(Width::W8.hex_digits(), 2);
    assert_eq!(Width::new(12).unwrap().hex_digits(), 3);
}

#[test]
fn serializes_as_plain_integer() {
    assert_eq!(serde_json::to_string(&Width::W8).unwrap(), "8");
    let parsed: Width = serde_json::from_str("16").unwrap();
    assert_eq!(parsed.bits(), 16);
    assert!(serde_json::from_str::<Width>("0").is_err());
}
