//! MIPS32 `REGIMM` Branch Selectors.

/// Branch on Less Than Zero.
pub const BLTZ: u32 = 0b00000;

/// Branch on Greater Than or Equal to Zero.
pub const BGEZ: u32 = 0b00001;
