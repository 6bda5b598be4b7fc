//! System-on-Chip (SoC) Components.
//!
//! This module organizes the memory side of the simulated system: the
//! region-based memory and the bus trait the core accesses it through.

/// Region-based simulated memory.
pub mod memory;

/// Bus trait definitions for word access.
pub mod traits;

pub use self::memory::{Memory, Region};
pub use self::traits::Bus;
