//! # ALU Shift Tests

use mipsim_core::core::units::alu::{Alu, AluOp};

#[test]
fn test_shift_left_logical() {
    assert_eq!(Alu::execute(AluOp::Sll, 1, 31), 0x8000_0000);
    assert_eq!(Alu::execute(AluOp::Sll, 0xFFFF_FFFF, 4), 0xFFFF_FFF0);
}

#[test]
fn test_shift_right_logical_fills_zero() {
    assert_eq!(Alu::execute(AluOp::Srl, 0x8000_0000, 31), 1);
}

#[test]
fn test_shift_right_arithmetic_preserves_sign() {
    assert_eq!(Alu::execute(AluOp::Sra, 0x8000_0000, 31), 0xFFFF_FFFF);
    assert_eq!(Alu::execute(AluOp::Sra, 0x4000_0000, 30), 1);
}

#[test]
fn test_shift_amount_uses_low_five_bits() {
    assert_eq!(Alu::execute(AluOp::Sll, 1, 32), 1);
    assert_eq!(Alu::execute(AluOp::Srl, 2, 33), 1);
}

#[test]
fn test_lui_places_upper_half() {
    assert_eq!(Alu::execute(AluOp::Lui, 0xDEAD, 0xFFFF), 0xFFFF_0000);
    assert_eq!(Alu::execute(AluOp::Lui, 0, 0x1001), 0x1001_0000);
}
