//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR, XOR, NOR and the signed set-less-than.
//! The comparison result is always 0 or 1.

use super::AluOp;

/// Executes a logical or comparison operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic/comparison variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 32-bit result. Returns `0` for non-logic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Nor => !(a | b),
        AluOp::Slt => u32::from((a as i32) < (b as i32)),
        _ => 0,
    }
}
