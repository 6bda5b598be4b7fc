//! Execution units and functional components.
//!
//! This module contains the stateless units the executor delegates to:
//! the integer ALU, the branch resolution unit and the load/store unit.

/// Arithmetic Logic Unit for integer and multiply/divide operations.
pub mod alu;

/// Branch Resolution Unit for conditional branch evaluation.
pub mod bru;

/// Load/Store Unit for address and byte-lane computations.
pub mod lsu;
