//! Simulation driver and program loading.
//!
//! Provides the program-image parser and the `Simulator` that owns the CPU,
//! the loaded program and the run state.

/// Program image parsing and placement.
pub mod loader;

/// Cycle driver, run state and inspection.
pub mod simulator;

pub use self::loader::ProgramImage;
pub use self::simulator::{HaltReason, ListingLine, RunState, Simulator};
