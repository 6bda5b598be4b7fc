//! MIPS32 functional simulator library.
//!
//! This crate implements a cycle-accurate functional simulator for a reduced MIPS32
//! integer subset with the following:
//! 1. **ISA:** Field extraction, two-level decoding and disassembly.
//! 2. **Core:** Double-buffered architectural state, ALU/branch/load-store units and
//!    a pure executor whose effects are committed at cycle boundaries.
//! 3. **Memory:** Disjoint named regions with total, little-endian word access.
//! 4. **Simulation:** Program loading, the run-state driver, configuration and statistics.

/// Common types and constants (access widths, errors, memory map).
pub mod common;
/// Simulator configuration (memory layout, tracing, unsupported-word policy).
pub mod config;
/// CPU core (architectural state, execution units, cycle commit).
pub mod core;
/// Instruction set (encodings, decode, disassembly, ABI names).
pub mod isa;
/// Program loading and the cycle driver.
pub mod sim;
/// Memory regions and the bus trait.
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// CPU type; holds the current/next snapshots and memory.
pub use crate::core::Cpu;
/// Parsed program image.
pub use crate::sim::ProgramImage;
/// Top-level driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
