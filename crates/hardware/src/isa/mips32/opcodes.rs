//! MIPS32 Primary Opcodes.
//!
//! Defines the primary opcodes (bits 31-26) for the supported subset.

/// R-format instructions; the operation is selected by the function code.
pub const SPECIAL: u32 = 0b000000;

/// Sign-comparing branches against zero; the operation is selected by `rt`.
pub const REGIMM: u32 = 0b000001;

/// Jump (J-format).
pub const J: u32 = 0b000010;

/// Jump and Link (J-format).
pub const JAL: u32 = 0b000011;

/// Branch on Equal.
pub const BEQ: u32 = 0b000100;

/// Branch on Not Equal.
pub const BNE: u32 = 0b000101;

/// Branch on Less Than or Equal to Zero.
pub const BLEZ: u32 = 0b000110;

/// Branch on Greater Than Zero.
pub const BGTZ: u32 = 0b000111;

/// Add Immediate.
pub const ADDI: u32 = 0b001000;

/// Add Immediate Unsigned.
pub const ADDIU: u32 = 0b001001;

/// Set on Less Than Immediate.
pub const SLTI: u32 = 0b001010;

/// And Immediate.
pub const ANDI: u32 = 0b001100;

/// Or Immediate.
pub const ORI: u32 = 0b001101;

/// Exclusive Or Immediate.
pub const XORI: u32 = 0b001110;

/// Load Upper Immediate.
pub const LUI: u32 = 0b001111;

/// Load Byte.
pub const LB: u32 = 0b100000;

/// Load Halfword.
pub const LH: u32 = 0b100001;

/// Load Word.
pub const LW: u32 = 0b100011;

/// Store Byte.
pub const SB: u32 = 0b101000;

/// Store Halfword.
pub const SH: u32 = 0b101001;

/// Store Word.
pub const SW: u32 = 0b101011;
