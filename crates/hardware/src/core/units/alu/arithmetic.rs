//! ALU arithmetic operations.
//!
//! Implements integer addition and subtraction, and the multiply/divide
//! family that targets the `HI`/`LO` pair.
//!
//! Addition and subtraction wrap modulo 2^32 for both the trapping and the
//! unsigned mnemonics; overflow exceptions are not modelled.

use super::AluOp;

/// Number of bits in a 32-bit word (used to split the 64-bit product).
const WORD_BITS: u32 = 32;

/// Operations writing the `HI`/`LO` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MulDivOp {
    /// Signed 32x32 -> 64 multiply.
    Mult,
    /// Unsigned 32x32 -> 64 multiply.
    Multu,
    /// Signed divide.
    Div,
    /// Unsigned divide.
    Divu,
}

/// Result of a multiply/divide: new `HI` and `LO` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HiLo {
    /// High product word, or the remainder.
    pub hi: u32,
    /// Low product word, or the quotient.
    pub lo: u32,
}

/// Executes an add or subtract.
///
/// Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}

/// Executes a multiply or divide.
///
/// # Arguments
///
/// * `op` - The multiply/divide operation.
/// * `a`  - Multiplicand or dividend (`rs`).
/// * `b`  - Multiplier or divisor (`rt`).
///
/// # Returns
///
/// The new `HI`/`LO` pair, or `None` when a division has a zero divisor.
/// Signed division truncates toward zero; `i32::MIN / -1` wraps to
/// `i32::MIN` with a zero remainder.
pub fn mul_div(op: MulDivOp, a: u32, b: u32) -> Option<HiLo> {
    match op {
        MulDivOp::Mult => {
            let product = i64::from(a as i32) * i64::from(b as i32);
            Some(split(product as u64))
        }
        MulDivOp::Multu => Some(split(u64::from(a) * u64::from(b))),
        MulDivOp::Div => {
            if b == 0 {
                return None;
            }
            let (a, b) = (a as i32, b as i32);
            Some(HiLo {
                hi: a.wrapping_rem(b) as u32,
                lo: a.wrapping_div(b) as u32,
            })
        }
        MulDivOp::Divu => {
            if b == 0 {
                return None;
            }
            Some(HiLo {
                hi: a % b,
                lo: a / b,
            })
        }
    }
}

/// Splits a 64-bit product into its high and low words.
#[inline]
const fn split(product: u64) -> HiLo {
    HiLo {
        hi: (product >> WORD_BITS) as u32,
        lo: product as u32,
    }
}
