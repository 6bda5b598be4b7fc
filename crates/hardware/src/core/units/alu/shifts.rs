//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL),
//! shift-right arithmetic (SRA) and the load-upper-immediate placement.
//!
//! Shift amounts are masked to 5 bits (0-31).

use super::AluOp;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Bit position of the upper halfword.
const UPPER_HALF_SHIFT: u32 = 16;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (lower 5 bits used); for `Lui`, the immediate.
///
/// # Returns
///
/// The 32-bit result. Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let sh = b & SHAMT_MASK;
    match op {
        AluOp::Sll => a << sh,
        AluOp::Srl => a >> sh,
        AluOp::Sra => ((a as i32) >> sh) as u32,
        AluOp::Lui => b << UPPER_HALF_SHIFT,
        _ => 0,
    }
}
