//! MIPS32 General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for the MIPS32 architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`$0`-`$31`).
//! 2. **Invariant Enforcement:** Ensures that register `$0` is hardwired to zero.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use std::fmt;

use crate::common::constants::NUM_GPRS;
use crate::isa::abi;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations. Register `$0`
/// is hardwired to zero and cannot be modified. The file is `Copy` so that the
/// current and next architectural snapshots can be duplicated wholesale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_GPRS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    ///
    /// # Returns
    ///
    /// A new `Gpr` instance with all registers set to 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register. Register `$0` and
    /// out-of-range indices return 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs.get(idx).copied().unwrap_or(0)
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `$0` and to out-of-range indices are discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx == 0 {
            return;
        }
        if let Some(slot) = self.regs.get_mut(idx) {
            *slot = val;
        }
    }

    /// Iterates over `(index, value)` pairs for all 32 registers.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        (0..NUM_GPRS).map(|i| (i, self.read(i)))
    }
}

/// Dumps all registers two per line with their ABI names.
impl fmt::Display for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_GPRS).step_by(2) {
            writeln!(
                f,
                "${:<2} {:<4} = {:#010x}   ${:<2} {:<4} = {:#010x}",
                i,
                abi::name(i),
                self.read(i),
                i + 1,
                abi::name(i + 1),
                self.read(i + 1)
            )?;
        }
        Ok(())
    }
}
