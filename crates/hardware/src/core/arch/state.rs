//! Architectural State Snapshot.
//!
//! Bundles everything a single instruction can observe or modify apart from
//! memory: the register file, the `HI`/`LO` multiply/divide pair and the
//! program counter. The CPU keeps two copies of this structure (current and
//! next) and commits by copying one over the other.

use crate::core::arch::gpr::Gpr;

/// One complete copy of the architectural register state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArchState {
    /// General-purpose registers.
    pub gpr: Gpr,
    /// High word of the last multiply, or the last division remainder.
    pub hi: u32,
    /// Low word of the last multiply, or the last division quotient.
    pub lo: u32,
    /// Program counter: address of the instruction to execute.
    pub pc: u32,
}

impl ArchState {
    /// Creates a zeroed state whose program counter is `pc`.
    pub fn with_pc(pc: u32) -> Self {
        Self {
            pc,
            ..Self::default()
        }
    }
}
