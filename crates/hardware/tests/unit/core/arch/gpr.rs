//! # General-Purpose Register Tests
//!
//! Tests for the MIPS32 general-purpose register file implementation.

use mipsim_core::core::arch::gpr::Gpr;

#[test]
fn test_gpr_new_initializes_to_zero() {
    let gpr = Gpr::new();
    for i in 0..32 {
        assert_eq!(gpr.read(i), 0);
    }
}

#[test]
fn test_gpr_zero_register_ignores_writes() {
    let mut gpr = Gpr::new();
    for value in [1u32, 0xFFFF_FFFF, 0x8000_0000] {
        gpr.write(0, value);
        assert_eq!(gpr.read(0), 0);
    }
}

#[test]
fn test_gpr_write_all_registers() {
    let mut gpr = Gpr::new();
    for i in 1..32 {
        let value = 0x0101_0101 * i as u32;
        gpr.write(i, value);
        assert_eq!(gpr.read(i), value);
    }
}

#[test]
fn test_gpr_out_of_range_is_inert() {
    let mut gpr = Gpr::new();
    gpr.write(32, 7);
    assert_eq!(gpr.read(32), 0);
    assert_eq!(gpr, Gpr::new());
}

#[test]
fn test_gpr_iter_yields_all_pairs() {
    let mut gpr = Gpr::new();
    gpr.write(31, 0x1234);
    let pairs: Vec<_> = gpr.iter().collect();
    assert_eq!(pairs.len(), 32);
    assert_eq!(pairs[31], (31, 0x1234));
    assert_eq!(pairs[0], (0, 0));
}

#[test]
fn test_gpr_display_lists_abi_names() {
    let mut gpr = Gpr::new();
    gpr.write(8, 0xDEAD_BEEF);
    let text = gpr.to_string();
    assert_eq!(text.lines().count(), 16);
    assert!(text.contains("t0   = 0xdeadbeef"));
    assert!(text.contains("ra"));
}

#[test]
fn test_gpr_copy_is_independent() {
    let mut a = Gpr::new();
    a.write(5, 1);
    let mut b = a;
    b.write(5, 2);
    assert_eq!(a.read(5), 1);
    assert_eq!(b.read(5), 2);
}
