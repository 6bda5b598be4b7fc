//! Branch Resolution Unit (BRU).
//!
//! Evaluates conditional branch predicates and computes control-flow targets.
//! There is no prediction: the simulator resolves every branch in the cycle
//! that executes it, and no delay slot is modelled.

use crate::common::constants::INSTRUCTION_SIZE;

/// Condition tested by a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchCond {
    /// `rs == rt`.
    Eq,
    /// `rs != rt`.
    Ne,
    /// `rs <= 0` (signed).
    Lez,
    /// `rs < 0` (signed).
    Ltz,
    /// `rs >= 0` (signed).
    Gez,
    /// `rs > 0` (signed).
    Gtz,
}

/// Branch Resolution Unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Evaluates a branch condition.
    ///
    /// # Arguments
    ///
    /// * `cond` - Condition to test.
    /// * `rs`   - Value of the first source register.
    /// * `rt`   - Value of the second source register (ignored by the zero comparisons).
    ///
    /// # Returns
    ///
    /// `true` if the branch is taken.
    pub fn taken(cond: BranchCond, rs: u32, rt: u32) -> bool {
        let s = rs as i32;
        match cond {
            BranchCond::Eq => rs == rt,
            BranchCond::Ne => rs != rt,
            BranchCond::Lez => s <= 0,
            BranchCond::Ltz => s < 0,
            BranchCond::Gez => s >= 0,
            BranchCond::Gtz => s > 0,
        }
    }

    /// Computes the next PC of a conditional branch at `pc`.
    ///
    /// A taken branch lands at `pc + 4 + offset`, where `offset` is the
    /// already-scaled byte displacement; otherwise execution falls through
    /// to `pc + 4`.
    pub fn next_pc(pc: u32, offset: u32, taken: bool) -> u32 {
        let fall_through = pc.wrapping_add(INSTRUCTION_SIZE);
        if taken {
            fall_through.wrapping_add(offset)
        } else {
            fall_through
        }
    }
}
