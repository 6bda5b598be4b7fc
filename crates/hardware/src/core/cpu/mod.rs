//! CPU Core Definition and Cycle Commit.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the `current` and `next` architectural snapshots.
//! 2. **Memory:** Owns the region-based memory the program runs from.
//! 3. **Cycle Execution:** Fetch, decode, execute, apply, then publish `next` as `current`.
//! 4. **Observability:** Emits one `trace!` event per committed instruction when enabled.

/// Pure instruction execution and effect application.
pub mod execution;

pub use self::execution::{Effects, execute};

use tracing::trace;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::ExecError;
use crate::core::arch::ArchState;
use crate::isa::decode::decode;
use crate::isa::disasm::format_decoded;
use crate::isa::instruction::Decoded;
use crate::soc::memory::Memory;
use crate::soc::traits::Bus;

/// Outcome of one committed cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// The decoded instruction.
    pub decoded: Decoded,
    /// The effects that were committed.
    pub effects: Effects,
}

/// Main CPU structure containing all processor state.
///
/// During a cycle all reads reference `current` and all writes target
/// `next`; the cycle ends by copying `next` over `current`.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Committed architectural state.
    pub current: ArchState,
    /// State under construction for the cycle in flight.
    pub next: ArchState,
    /// Simulated memory.
    pub memory: Memory,
    /// Enable per-instruction tracing.
    pub trace: bool,
}

impl Cpu {
    /// Creates a new CPU with zeroed registers and the program counter at `pc`.
    ///
    /// # Arguments
    ///
    /// * `memory` - Memory to execute from.
    /// * `pc`     - Initial program counter.
    /// * `trace`  - Emit a `trace!` event for every committed instruction.
    pub fn new(memory: Memory, pc: u32, trace: bool) -> Self {
        let state = ArchState::with_pc(pc);
        Self {
            current: state,
            next: state,
            memory,
            trace: trace || cfg!(feature = "always-trace"),
        }
    }

    /// Zeroes registers and memory and places the program counter at `pc`.
    pub fn reset(&mut self, pc: u32) {
        self.current = ArchState::with_pc(pc);
        self.next = self.current;
        self.memory.clear();
    }

    /// Reads the instruction word at the current program counter.
    pub fn fetch(&self) -> u32 {
        self.memory.read_u32(self.current.pc)
    }

    /// Executes and commits one instruction.
    ///
    /// # Returns
    ///
    /// The retired instruction and its effects, or the fault it raised. On a
    /// fault nothing is committed: `current`, `next` and memory are unchanged.
    pub fn cycle(&mut self) -> Result<Retired, ExecError> {
        let pc = self.current.pc;
        let decoded = decode(self.fetch());
        let effects = execute(&decoded, &self.current, &self.memory)?;

        self.next = self.current;
        effects.apply(&mut self.next);
        if let Some((addr, word)) = effects.mem_write {
            self.memory.write_u32(addr, word);
        }
        self.commit();

        if self.trace {
            trace!(
                "{pc:#010x}  {:#010x}  {}",
                decoded.raw,
                format_decoded(&decoded)
            );
        }

        Ok(Retired {
            pc,
            decoded,
            effects,
        })
    }

    /// Commits a cycle that only advances the program counter by one instruction.
    pub fn skip(&mut self) {
        self.next = self.current;
        self.next.pc = self.current.pc.wrapping_add(INSTRUCTION_SIZE);
        self.commit();
    }

    /// Publishes `next` as the committed state.
    fn commit(&mut self) {
        self.current = self.next;
    }
}
