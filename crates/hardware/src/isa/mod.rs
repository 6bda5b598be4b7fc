//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic for the
//! supported MIPS32 integer subset.
//!
//! # Layout
//!
//! * `mips32`: Raw encodings (primary opcodes, `SPECIAL` functions, `REGIMM` selectors).
//! * `instruction`: Field extraction and the tagged `Op`/`Decoded` types.
//! * `decode`: Two-level decoder.
//! * `disasm`: Text rendering used by tracing and the shell.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic.
pub mod decode;

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// MIPS32 instruction encodings.
pub mod mips32;
