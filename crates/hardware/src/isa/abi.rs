//! MIPS o32 Application Binary Interface (ABI) register names.
//!
//! Defines the conventional register names and their indices, used by the
//! disassembler, the system-call halt report and the shell's register parser.

/// Register $0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register $2 (first return value, v0; holds the system-call code).
pub const REG_V0: usize = 2;
/// Register $4 (first argument, a0).
pub const REG_A0: usize = 4;
/// Register $8 (temporary t0).
pub const REG_T0: usize = 8;
/// Register $9 (temporary t1).
pub const REG_T1: usize = 9;
/// Register $10 (temporary t2).
pub const REG_T2: usize = 10;
/// Register $29 (stack pointer, sp).
pub const REG_SP: usize = 29;
/// Register $31 (return address, ra).
pub const REG_RA: usize = 31;

/// ABI names for $0-$31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the ABI name of a register index, or `"??"` when out of range.
#[inline]
pub fn name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("??")
}

/// Parses a register reference.
///
/// Accepts ABI names (`t0`), numeric forms (`8`, `r8`) and either with a
/// leading `$` (`$t0`, `$8`). Returns `None` for anything else.
pub fn parse(text: &str) -> Option<usize> {
    let text = text.trim();
    let text = text.strip_prefix('$').unwrap_or(text);
    let numeric = text
        .strip_prefix('r')
        .or_else(|| text.strip_prefix('R'))
        .unwrap_or(text);
    if let Ok(idx) = numeric.parse::<usize>() {
        return (idx < REG_NAMES.len()).then_some(idx);
    }
    if text == "s8" {
        return Some(30);
    }
    REG_NAMES.iter().position(|n| *n == text)
}
