//! # Load/Store Unit Tests
//!
//! Byte-lane extraction and merging on little-endian words.

use mipsim_core::common::AccessWidth;
use mipsim_core::core::units::lsu::Lsu;
use rstest::rstest;

const WORD: u32 = 0x8180_7F01;

#[rstest]
#[case(0, 0x0000_0001)]
#[case(1, 0x0000_007F)]
#[case(2, 0xFFFF_FF80)]
#[case(3, 0xFFFF_FF81)]
fn test_extract_byte_sign_extends(#[case] offset: u32, #[case] expected: u32) {
    assert_eq!(Lsu::extract(WORD, 0x100 + offset, AccessWidth::Byte), expected);
}

#[test]
fn test_extract_half() {
    assert_eq!(Lsu::extract(WORD, 0x100, AccessWidth::Half), 0x0000_7F01);
    assert_eq!(Lsu::extract(WORD, 0x102, AccessWidth::Half), 0xFFFF_8180);
}

#[test]
fn test_extract_word() {
    assert_eq!(Lsu::extract(WORD, 0x100, AccessWidth::Word), WORD);
}

#[test]
fn test_merge_byte_keeps_other_lanes() {
    assert_eq!(
        Lsu::merge(0x1122_3344, 0x101, 0xFFFF_FFAB, AccessWidth::Byte),
        0x1122_AB44
    );
    assert_eq!(
        Lsu::merge(0x1122_3344, 0x103, 0xCD, AccessWidth::Byte),
        0xCD22_3344
    );
}

#[test]
fn test_merge_half() {
    assert_eq!(
        Lsu::merge(0x1122_3344, 0x102, 0xBEEF, AccessWidth::Half),
        0xBEEF_3344
    );
}

#[test]
fn test_addresses() {
    assert_eq!(Lsu::effective_address(0x1000_0000, (-4_i32) as u32), 0x0FFF_FFFC);
    assert_eq!(Lsu::word_address(0x1000_0007), 0x1000_0004);
}
