//! # ABI Register Name Tests

use mipsim_core::isa::abi;

#[test]
fn test_names_follow_o32_convention() {
    assert_eq!(abi::name(0), "zero");
    assert_eq!(abi::name(abi::REG_V0), "v0");
    assert_eq!(abi::name(abi::REG_T0), "t0");
    assert_eq!(abi::name(abi::REG_SP), "sp");
    assert_eq!(abi::name(abi::REG_RA), "ra");
    assert_eq!(abi::name(32), "??");
}

#[test]
fn test_parse_accepts_all_forms() {
    assert_eq!(abi::parse("$t0"), Some(8));
    assert_eq!(abi::parse("t0"), Some(8));
    assert_eq!(abi::parse("$8"), Some(8));
    assert_eq!(abi::parse("8"), Some(8));
    assert_eq!(abi::parse("r8"), Some(8));
    assert_eq!(abi::parse("$ra"), Some(31));
    assert_eq!(abi::parse("s8"), Some(30));
    assert_eq!(abi::parse(" $zero "), Some(0));
}

#[test]
fn test_parse_rejects_unknown() {
    assert_eq!(abi::parse("$32"), None);
    assert_eq!(abi::parse("x1"), None);
    assert_eq!(abi::parse(""), None);
}

#[test]
fn test_every_name_parses_back() {
    for (idx, name) in abi::REG_NAMES.iter().enumerate() {
        assert_eq!(abi::parse(name), Some(idx));
    }
}
