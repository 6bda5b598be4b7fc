//! MIPS32 architectural state.
//!
//! This module contains the programmer-visible state of the processor:
//! 1. **GPRs:** General-Purpose Register file with `$0` hardwired to zero.
//! 2. **State:** The register file together with `HI`, `LO` and the program counter.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Complete architectural register snapshot.
pub mod state;

pub use self::gpr::Gpr;
pub use self::state::ArchState;
