//! Load/Store Unit (LSU).
//!
//! This module provides the Load/Store Unit, responsible for the address and
//! byte-lane arithmetic of memory instructions. Memory is only ever accessed
//! through whole aligned words:
//! 1. **Loads:** The aligned word containing the effective address is read and
//!    the addressed lane is extracted and sign-extended.
//! 2. **Stores:** Sub-word stores read the aligned word, merge the new lane in,
//!    and write the whole word back.
//!
//! Lanes are little-endian: byte offset 0 is bits 7-0 of the word.

use crate::common::constants::WORD_ALIGN_MASK;
use crate::common::data::AccessWidth;

/// Mask selecting the byte offset within a word.
const BYTE_OFFSET_MASK: u32 = 0x3;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Computes `base + sext(imm)` with wrapping.
    #[inline]
    pub fn effective_address(base: u32, offset: u32) -> u32 {
        base.wrapping_add(offset)
    }

    /// Rounds an address down to its containing word.
    #[inline]
    pub fn word_address(addr: u32) -> u32 {
        addr & WORD_ALIGN_MASK
    }

    /// Bit position of the lane addressed by `addr` within its word.
    ///
    /// Half-word accesses use the half-word lane containing `addr`, so an
    /// odd address selects the same lane as the even address below it.
    #[inline]
    fn lane_shift(addr: u32, width: AccessWidth) -> u32 {
        let offset = addr & BYTE_OFFSET_MASK;
        let offset = match width {
            AccessWidth::Byte => offset,
            AccessWidth::Half => offset & !0x1,
            AccessWidth::Word => 0,
        };
        offset * 8
    }

    /// Extracts and sign-extends the lane addressed by `addr` from `word`.
    ///
    /// # Arguments
    ///
    /// * `word`  - The aligned word containing `addr`.
    /// * `addr`  - The effective address of the load.
    /// * `width` - Access width.
    ///
    /// # Returns
    ///
    /// The loaded value as written to the destination register.
    pub fn extract(word: u32, addr: u32, width: AccessWidth) -> u32 {
        let lane = (word >> Self::lane_shift(addr, width)) & width.mask();
        match width {
            AccessWidth::Byte => lane as u8 as i8 as i32 as u32,
            AccessWidth::Half => lane as u16 as i16 as i32 as u32,
            AccessWidth::Word => lane,
        }
    }

    /// Merges the low bytes of `value` into the lane of `word` addressed by `addr`.
    ///
    /// # Arguments
    ///
    /// * `word`  - The current aligned word in memory.
    /// * `addr`  - The effective address of the store.
    /// * `value` - The source register value; only the low `width` bytes are stored.
    /// * `width` - Access width.
    ///
    /// # Returns
    ///
    /// The word to write back to the aligned address.
    pub fn merge(word: u32, addr: u32, value: u32, width: AccessWidth) -> u32 {
        let shift = Self::lane_shift(addr, width);
        let mask = width.mask() << shift;
        (word & !mask) | ((value << shift) & mask)
    }
}
