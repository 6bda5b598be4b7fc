//! Core processor implementation.
//!
//! This module contains the CPU implementation: the architectural state, the
//! stateless execution units, and the cycle driver that ties them to memory.

/// Architecture-specific components (register file, architectural snapshot).
pub mod arch;

/// CPU core implementation and cycle commit.
pub mod cpu;

/// Execution units (ALU, branch resolution, load/store).
pub mod units;

pub use self::cpu::Cpu;
