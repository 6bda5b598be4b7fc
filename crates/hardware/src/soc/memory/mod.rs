//! Simulated Memory.
//!
//! This module implements the flat, byte-addressable memory of the simulator. It provides:
//! 1. **Regions:** A set of disjoint named address ranges, each with its own backing store.
//! 2. **Word Access:** Aligned 32-bit little-endian reads and writes through the `Bus` trait.
//! 3. **Total Semantics:** A word whose address lies outside every region reads as zero
//!    and writes to it are dropped.
//!
//! A word access is resolved against the single region containing its
//! address. Bytes of that word past the region end read as zero and are not
//! written, so an access never reaches into a neighbouring region.

/// Named region backing store.
pub mod region;

pub use self::region::Region;

use crate::common::constants::{
    DATA_BASE, INSTRUCTION_SIZE, KDATA_BASE, KTEXT_BASE, SEGMENT_SIZE, STACK_BASE, TEXT_BASE,
};
use crate::soc::traits::Bus;

/// System memory: an ordered collection of disjoint regions.
#[derive(Clone, Debug)]
pub struct Memory {
    regions: Vec<Region>,
}

impl Memory {
    /// Creates memory from a list of regions.
    ///
    /// Regions are kept sorted by base address. Overlap is rejected earlier by
    /// `Config::validate`; if overlapping regions are passed anyway the lowest
    /// one wins for every shared address.
    pub fn new(mut regions: Vec<Region>) -> Self {
        regions.sort_by_key(Region::begin);
        Self { regions }
    }

    /// Creates memory with the default MU-MIPS segment map.
    ///
    /// | Region  | Base          |
    /// |---------|---------------|
    /// | `text`  | `0x0040_0000` |
    /// | `data`  | `0x1000_0000` |
    /// | `stack` | `0x7FF0_0000` |
    /// | `ktext` | `0x8000_0000` |
    /// | `kdata` | `0x9000_0000` |
    ///
    /// Every region is `0x0010_0000` bytes.
    pub fn with_default_map() -> Self {
        Self::new(vec![
            Region::new("text", TEXT_BASE, SEGMENT_SIZE),
            Region::new("data", DATA_BASE, SEGMENT_SIZE),
            Region::new("stack", STACK_BASE, SEGMENT_SIZE),
            Region::new("ktext", KTEXT_BASE, SEGMENT_SIZE),
            Region::new("kdata", KDATA_BASE, SEGMENT_SIZE),
        ])
    }

    /// Returns the configured regions, sorted by base address.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Returns the region containing `addr`, if any.
    pub fn region_of(&self, addr: u32) -> Option<&Region> {
        self.regions.iter().find(|r| r.contains(addr))
    }

    /// Writes `words` sequentially starting at `base`, 4 bytes per word.
    ///
    /// Words landing outside every region are dropped.
    pub fn load_words(&mut self, base: u32, words: &[u32]) {
        let mut addr = base;
        for &word in words {
            self.write_u32(addr, word);
            addr = addr.wrapping_add(INSTRUCTION_SIZE);
        }
    }

    /// Zeroes every region.
    pub fn clear(&mut self) {
        self.regions.iter_mut().for_each(Region::clear);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::with_default_map()
    }
}

impl Bus for Memory {
    /// Assembles the word at `addr` from four little-endian bytes of the
    /// region containing `addr`.
    fn read_u32(&self, addr: u32) -> u32 {
        let Some(region) = self.region_of(addr) else {
            return 0;
        };
        let bytes = [0u32, 1, 2, 3].map(|i| {
            let a = addr.wrapping_add(i);
            if region.contains(a) { region.read_u8(a) } else { 0 }
        });
        u32::from_le_bytes(bytes)
    }

    /// Stores `val` at `addr` as four little-endian bytes in the region
    /// containing `addr`.
    fn write_u32(&mut self, addr: u32, val: u32) {
        let Some(region) = self.regions.iter_mut().find(|r| r.contains(addr)) else {
            return;
        };
        for (i, byte) in (0u32..).zip(val.to_le_bytes()) {
            let a = addr.wrapping_add(i);
            if region.contains(a) {
                region.write_u8(a, byte);
            }
        }
    }
}
