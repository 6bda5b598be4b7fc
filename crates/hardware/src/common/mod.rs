//! Common utilities and types used throughout the MIPS simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Instruction sizes, jump masks and the default memory map.
//! 2. **Memory Access:** Access widths used by the load/store unit.
//! 3. **Error Handling:** Execution faults, driver errors, load and configuration errors.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access width definitions.
pub mod data;

/// Error types.
pub mod error;

pub use data::AccessWidth;
pub use error::{ConfigError, ExecError, LoadError, RunError, SimError};
