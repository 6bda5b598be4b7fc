//! MIPS32 Base Integer Instruction Subset.
//!
//! Defines the encodings of the supported MIPS32 instructions.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 31-26).
//! - `funct`: Function codes (bits 5-0) selecting an operation under `SPECIAL`.
//! - `regimm`: `rt` field values (bits 20-16) selecting a branch under `REGIMM`.

/// Function code definitions for `SPECIAL` (R-format) instructions.
pub mod funct;

/// Primary opcode definitions.
pub mod opcodes;

/// `REGIMM` branch selectors carried in the `rt` field.
pub mod regimm;
