//! Bus trait for word-granular memory access.
//!
//! This module defines the `Bus` trait through which the executor and the
//! cycle driver reach memory. It provides:
//! 1. **Reads:** `read_u32` takes `&self`, so instruction execution can observe
//!    memory without being able to modify it.
//! 2. **Writes:** `write_u32` is only called by the driver when it commits a cycle.
//!
//! Both operations are total: implementors must never panic on an address.

/// Word-granular access to simulated memory.
pub trait Bus {
    /// Reads four bytes (little-endian) starting at `addr`.
    ///
    /// Uncovered bytes read as zero.
    fn read_u32(&self, addr: u32) -> u32;

    /// Writes four bytes (little-endian) starting at `addr`.
    ///
    /// Bytes outside every backing range are dropped.
    fn write_u32(&mut self, addr: u32, val: u32);
}
