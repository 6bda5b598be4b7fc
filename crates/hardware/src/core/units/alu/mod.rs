//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used by the executor.
//! It handles arithmetic, logical operations, comparisons and shifts, plus
//! the `HI`/`LO` multiply/divide operations.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub and the Mult/Multu/Div/Divu family
//! - [`logic`]:      And, Or, Xor, Nor, Slt
//! - [`shifts`]:     Sll, Srl, Sra, Lui

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, xor, nor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra, lui).
pub mod shifts;

pub use self::arithmetic::{HiLo, MulDivOp};

/// Single-result ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
    /// Signed set-on-less-than (result is 0 or 1).
    Slt,
    /// Logical left shift by `b & 31`.
    Sll,
    /// Logical right shift by `b & 31`.
    Srl,
    /// Arithmetic right shift by `b & 31`.
    Sra,
    /// Places the low half of `b` in the upper half of the result.
    Lui,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Stateless dispatcher over the arithmetic, logic and shift submodules.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes a single-result ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (`rs`, or `rt` for shifts)
    /// * `b`  - Second operand (`rt` or an extended immediate; the shift amount for shifts)
    ///
    /// # Returns
    ///
    /// The 32-bit result. Arithmetic wraps modulo 2^32; no overflow is signalled.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 4), 0x10);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Lui, 0, 0x1234), 0x1234_0000);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Nor | AluOp::Slt => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra | AluOp::Lui => shifts::execute(op, a, b),
        }
    }
}
