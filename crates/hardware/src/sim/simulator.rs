//! Simulator: owns the CPU, the loaded program and the run state.
//!
//! This module implements the cycle driver. It performs the following:
//! 1. **Lifecycle:** `Ready` until the first step, `Running` while cycles commit,
//!    `Halted` after `SYSCALL`, an explicit stop, or a fault. Only `initialize`
//!    and `reset` leave `Halted`.
//! 2. **Policy:** Unsupported words either halt the simulator or are skipped,
//!    as configured.
//! 3. **Inspection:** Register, `HI`/`LO`, PC and memory accessors for the shell,
//!    plus the program listing and memory dump.

use tracing::{debug, info, warn};

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::{ConfigError, ExecError, LoadError, RunError, SimError};
use crate::config::{Config, UnsupportedPolicy};
use crate::core::Cpu;
use crate::isa::abi;
use crate::isa::disasm::disassemble;
use crate::sim::loader::ProgramImage;
use crate::soc::traits::Bus;
use crate::stats::SimStats;

/// Driver lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Initialized; no cycle has run since the last initialize/reset.
    Ready,
    /// At least one cycle has committed and the run flag is still up.
    Running,
    /// No further cycles will run until the next initialize/reset.
    Halted,
}

/// Why the simulator entered `Halted`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HaltReason {
    /// A `SYSCALL` committed; `v0` is the value of `$v0` at the call.
    Syscall {
        /// System-call code.
        v0: u32,
    },
    /// `stop` was requested by the caller.
    Stopped,
    /// An instruction faulted; its cycle was not committed.
    Fault(ExecError),
}

/// One line of the program listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingLine {
    /// Address of the word.
    pub addr: u32,
    /// Word currently stored at `addr`.
    pub word: u32,
    /// Disassembly of `word`.
    pub text: String,
}

/// Top-level simulator: CPU state, memory, program and run bookkeeping.
#[derive(Debug)]
pub struct Simulator {
    cpu: Cpu,
    config: Config,
    program: ProgramImage,
    load_base: u32,
    state: RunState,
    halt_reason: Option<HaltReason>,
    instruction_count: u64,
    stats: SimStats,
}

impl Simulator {
    /// Creates a simulator with zeroed state, an empty program and the PC at
    /// the configured text base.
    ///
    /// # Returns
    ///
    /// A `ConfigError` if the memory layout is invalid.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let load_base = config.memory.text_base;
        let cpu = Cpu::new(
            config.memory.build(),
            load_base,
            config.general.trace_instructions,
        );
        Ok(Self {
            cpu,
            config: config.clone(),
            program: ProgramImage::default(),
            load_base,
            state: RunState::Ready,
            halt_reason: None,
            instruction_count: 0,
            stats: SimStats::default(),
        })
    }

    /// Zeroes registers, `HI`/`LO` and memory, places the program counter at
    /// `load_base` and reloads the current program image there.
    ///
    /// The instruction counter and statistics restart from zero and the
    /// simulator returns to `Ready`.
    pub fn initialize(&mut self, load_base: u32) -> Result<(), LoadError> {
        self.load_base = load_base;
        self.cpu.reset(load_base);
        self.state = RunState::Ready;
        self.halt_reason = None;
        self.instruction_count = 0;
        self.stats = SimStats::default();
        debug!("initialized at {load_base:#010x}");
        self.program.load_into(&mut self.cpu.memory, load_base)
    }

    /// Replaces the program image and re-initializes at the current load base.
    ///
    /// An image that does not fit is rejected before any state changes; the
    /// previous program stays loaded.
    pub fn reset(&mut self, image: ProgramImage) -> Result<(), LoadError> {
        self.replace_program(image, self.load_base)
    }

    /// Loads a program at the configured text base.
    ///
    /// Rejects an image that does not fit without touching the current one.
    pub fn load_program(&mut self, image: ProgramImage) -> Result<(), LoadError> {
        self.replace_program(image, self.config.memory.text_base)
    }

    fn replace_program(&mut self, image: ProgramImage, base: u32) -> Result<(), LoadError> {
        image.check_fit(&self.cpu.memory, base)?;
        self.program = image;
        self.initialize(base)
    }

    /// Executes one cycle.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a cycle committed, `Ok(false)` if the simulator was
    /// already halted. A fault halts the simulator and is returned as an error.
    pub fn step(&mut self) -> Result<bool, SimError> {
        if self.state == RunState::Halted {
            return Ok(false);
        }
        self.state = RunState::Running;

        match self.cpu.cycle() {
            Ok(retired) => {
                self.instruction_count += 1;
                self.stats.record(&retired);
                if retired.effects.halt {
                    let v0 = self.cpu.current.gpr.read(abi::REG_V0);
                    self.halt(HaltReason::Syscall { v0 });
                }
                Ok(true)
            }
            Err(ExecError::UnsupportedInstruction { pc, word })
                if self.config.general.on_unsupported == UnsupportedPolicy::Skip =>
            {
                warn!("skipping unsupported instruction {word:#010x} at {pc:#010x}");
                self.cpu.skip();
                self.instruction_count += 1;
                self.stats.record_skip();
                Ok(true)
            }
            Err(e) => {
                self.halt(HaltReason::Fault(e));
                Err(e.into())
            }
        }
    }

    /// Executes up to `cycles` cycles, stopping early once halted.
    ///
    /// # Returns
    ///
    /// The number of cycles that committed. A fault is returned as a
    /// `RunError` carrying the cycles committed before it.
    pub fn run(&mut self, cycles: u64) -> Result<u64, RunError> {
        let mut executed = 0;
        while executed < cycles && self.step_counted(executed)? {
            executed += 1;
        }
        Ok(executed)
    }

    /// Executes until halted, or until `general.max_cycles` cycles have run.
    ///
    /// # Returns
    ///
    /// The number of cycles that committed, or a `RunError` as for `run`.
    pub fn run_to_halt(&mut self) -> Result<u64, RunError> {
        match self.config.general.max_cycles {
            Some(limit) => self.run(limit),
            None => {
                let mut executed = 0;
                while self.step_counted(executed)? {
                    executed += 1;
                }
                Ok(executed)
            }
        }
    }

    fn step_counted(&mut self, executed: u64) -> Result<bool, RunError> {
        self.step().map_err(|source| RunError { executed, source })
    }

    /// Halts the simulator unless it is already halted.
    pub fn stop(&mut self) {
        if self.state != RunState::Halted {
            self.halt(HaltReason::Stopped);
        }
    }

    fn halt(&mut self, reason: HaltReason) {
        self.state = RunState::Halted;
        self.halt_reason = Some(reason);
        match reason {
            HaltReason::Fault(e) => warn!(
                instructions = self.instruction_count,
                "simulator halted: {e}"
            ),
            _ => info!(
                instructions = self.instruction_count,
                "simulator halted: {reason:?}"
            ),
        }
    }

    /// Current lifecycle state.
    pub const fn status(&self) -> RunState {
        self.state
    }

    /// Returns `true` once halted.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Why the simulator halted, if it has.
    pub const fn halt_reason(&self) -> Option<HaltReason> {
        self.halt_reason
    }

    /// Number of committed cycles since the last initialize/reset.
    pub const fn instruction_count(&self) -> u64 {
        self.instruction_count
    }

    /// Execution statistics since the last initialize/reset.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// The CPU, for read-only inspection.
    pub const fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// The active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The loaded program image.
    pub const fn program(&self) -> &ProgramImage {
        &self.program
    }

    /// Address the program is loaded at.
    pub const fn load_base(&self) -> u32 {
        self.load_base
    }

    /// Reads a general-purpose register from the committed state.
    pub fn read_register(&self, idx: usize) -> u32 {
        self.cpu.current.gpr.read(idx)
    }

    /// Writes a general-purpose register in both snapshots.
    pub fn write_register(&mut self, idx: usize, val: u32) {
        self.cpu.current.gpr.write(idx, val);
        self.cpu.next.gpr.write(idx, val);
    }

    /// Reads `HI`.
    pub const fn read_hi(&self) -> u32 {
        self.cpu.current.hi
    }

    /// Writes `HI` in both snapshots.
    pub fn write_hi(&mut self, val: u32) {
        self.cpu.current.hi = val;
        self.cpu.next.hi = val;
    }

    /// Reads `LO`.
    pub const fn read_lo(&self) -> u32 {
        self.cpu.current.lo
    }

    /// Writes `LO` in both snapshots.
    pub fn write_lo(&mut self, val: u32) {
        self.cpu.current.lo = val;
        self.cpu.next.lo = val;
    }

    /// Reads the program counter.
    pub const fn read_pc(&self) -> u32 {
        self.cpu.current.pc
    }

    /// Reads the word at `addr`; uncovered addresses read 0.
    pub fn read_word(&self, addr: u32) -> u32 {
        self.cpu.memory.read_u32(addr)
    }

    /// Writes the word at `addr`; uncovered addresses are ignored.
    pub fn write_word(&mut self, addr: u32, val: u32) {
        self.cpu.memory.write_u32(addr, val);
    }

    /// Renders `word` as assembler text. Has no side effects.
    pub fn decode_for_display(&self, word: u32) -> String {
        disassemble(word)
    }

    /// Lists every loaded program word as it currently sits in memory.
    pub fn program_listing(&self) -> Vec<ListingLine> {
        (0..self.program.len())
            .map(|i| {
                let addr = ProgramImage::address_of(self.load_base, i);
                let word = self.read_word(addr);
                ListingLine {
                    addr,
                    word,
                    text: disassemble(word),
                }
            })
            .collect()
    }

    /// Reads the words at `start`, `start + 4`, ... up to and including `stop`.
    ///
    /// Words are read lazily, so the range may span the whole address space.
    pub fn dump_memory(&self, start: u32, stop: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        (start..=stop)
            .step_by(INSTRUCTION_SIZE as usize)
            .map(move |addr| (addr, self.read_word(addr)))
    }
}
