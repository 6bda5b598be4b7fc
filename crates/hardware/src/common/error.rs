//! Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Execution Faults:** Conditions raised while executing a single instruction.
//! 2. **Driver Errors:** Faults surfaced by the cycle driver to its caller, and
//!    runs cut short by one.
//! 3. **Load Errors:** Failures while reading or parsing a program image.
//! 4. **Configuration Errors:** Invalid memory maps or malformed configuration input.
//!
//! Out-of-range memory accesses are deliberately absent: they read as zero and
//! writes are dropped, so they never surface as errors.

use std::path::PathBuf;

use thiserror::Error;

/// Fault raised by the executor for the instruction at `pc`.
///
/// The cycle that raised the fault is never committed: neither the register
/// snapshots nor memory observe any of its effects.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    /// The opcode/function pattern is not part of the supported subset.
    ///
    /// The associated values are the fetch address and the raw word.
    #[error("unsupported instruction {word:#010x} at {pc:#010x}")]
    UnsupportedInstruction {
        /// Address the word was fetched from.
        pc: u32,
        /// Raw instruction encoding.
        word: u32,
    },

    /// `DIV`/`DIVU` with a zero divisor.
    #[error("arithmetic fault: division by zero at {pc:#010x} ({word:#010x})")]
    DivisionByZero {
        /// Address of the dividing instruction.
        pc: u32,
        /// Raw instruction encoding.
        word: u32,
    },
}

impl ExecError {
    /// Returns the address of the faulting instruction.
    pub fn pc(&self) -> u32 {
        match self {
            Self::UnsupportedInstruction { pc, .. } | Self::DivisionByZero { pc, .. } => *pc,
        }
    }
}

/// Error surfaced by the cycle driver.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// An instruction faulted; the simulator is now halted.
    #[error(transparent)]
    Exec(#[from] ExecError),
}

/// A bounded run cut short by a fault.
///
/// Carries the cycles that committed before the faulting one, which is not
/// counted.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("run stopped after {executed} cycle(s)")]
pub struct RunError {
    /// Cycles committed before the fault.
    pub executed: u64,
    /// The fault that halted the simulator.
    #[source]
    pub source: SimError,
}

/// Failure while reading or parsing a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("can't open program file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line is not a 32-bit hexadecimal word.
    #[error("line {line}: '{text}' is not a 32-bit hexadecimal word")]
    InvalidWord {
        /// 1-based line number.
        line: usize,
        /// Offending text, trimmed.
        text: String,
    },

    /// The image does not fit in the region holding the load base.
    #[error("program of {words} words does not fit at {base:#010x} ({capacity} words available)")]
    TooLarge {
        /// Number of words in the image.
        words: usize,
        /// Load base address.
        base: u32,
        /// Number of words that fit between the base and the region end.
        capacity: usize,
    },
}

/// Invalid simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two memory regions share at least one address.
    #[error("memory regions '{first}' and '{second}' overlap")]
    OverlappingRegions {
        /// Name of the lower region.
        first: String,
        /// Name of the region overlapping it.
        second: String,
    },

    /// A region has zero size or wraps past the end of the address space.
    #[error("memory region '{name}' has an invalid extent")]
    InvalidRegion {
        /// Name of the offending region.
        name: String,
    },

    /// The text base is not inside any configured region.
    #[error("text base {0:#010x} is not covered by any memory region")]
    MissingTextRegion(u32),

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
