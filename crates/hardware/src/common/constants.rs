//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Instruction Constants:** Instruction size and the link-register offset.
//! 2. **Memory Map:** The default MU-MIPS segment layout (text, data, stack, kernel).
//! 3. **Register Constants:** Register file dimensions.

/// Size of a MIPS32 instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Offset from the jumping instruction to the return address written by
/// `JAL`/`JALR` (the architectural two-instruction lookahead).
pub const LINK_OFFSET: u32 = 8;

/// Number of general-purpose registers.
pub const NUM_GPRS: usize = 32;

/// Mask selecting the 256 MiB bank kept from the PC by `J`/`JAL`.
pub const JUMP_BANK_MASK: u32 = 0xF000_0000;

/// Mask that rounds an address down to a word boundary.
pub const WORD_ALIGN_MASK: u32 = !0x3;

/// Size of every default memory segment (1 MiB).
pub const SEGMENT_SIZE: u32 = 0x0010_0000;

/// Base of the user text segment; programs are loaded and started here.
pub const TEXT_BASE: u32 = 0x0040_0000;

/// Base of the user data segment.
pub const DATA_BASE: u32 = 0x1000_0000;

/// Base of the stack segment.
pub const STACK_BASE: u32 = 0x7FF0_0000;

/// Base of the kernel text segment.
pub const KTEXT_BASE: u32 = 0x8000_0000;

/// Base of the kernel data segment.
pub const KDATA_BASE: u32 = 0x9000_0000;
