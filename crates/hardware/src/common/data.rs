//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used by the
//! load/store unit. Every access travels through the word-granular memory
//! primitive; the width only decides which byte lanes are extracted or merged.

/// Width of a data memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessWidth {
    /// Single byte (`LB`/`SB`).
    Byte,

    /// Two bytes (`LH`/`SH`).
    Half,

    /// Full 32-bit word (`LW`/`SW`).
    Word,
}

impl AccessWidth {
    /// Returns the access size in bytes.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Returns the mask selecting the low `bytes()` bytes of a word.
    pub const fn mask(self) -> u32 {
        match self {
            Self::Byte => 0x0000_00FF,
            Self::Half => 0x0000_FFFF,
            Self::Word => 0xFFFF_FFFF,
        }
    }
}
