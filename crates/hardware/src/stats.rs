//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the simulator. It provides:
//! 1. **Cycle and throughput:** Committed cycles, retired instructions and host speed.
//! 2. **Instruction mix:** Counts by category (ALU, mul/div, move, load, store, branch, jump, system).
//! 3. **Control flow:** Taken versus not-taken conditional branches.
//! 4. **Policy:** Unsupported words skipped instead of halting.

use std::time::Instant;

use serde::Serialize;

use crate::core::cpu::Retired;
use crate::isa::instruction::InstClass;

/// Simulation statistics structure tracking all execution metrics.
///
/// Serializes to JSON for machine consumption; the host start time is
/// skipped and reported as `host_seconds` by [`SimStats::summary`].
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Total committed cycles, including skipped words.
    pub cycles: u64,
    /// Number of instructions executed and committed.
    pub instructions_retired: u64,

    /// Count of ALU instructions (arithmetic, logic, compare, shift, `LUI`).
    pub inst_alu: u64,
    /// Count of multiply/divide instructions.
    pub inst_muldiv: u64,
    /// Count of `HI`/`LO` move instructions.
    pub inst_move: u64,
    /// Count of load instructions.
    pub inst_load: u64,
    /// Count of store instructions.
    pub inst_store: u64,
    /// Count of conditional branch instructions.
    pub inst_branch: u64,
    /// Count of conditional branches that were taken.
    pub branches_taken: u64,
    /// Count of jump instructions.
    pub inst_jump: u64,
    /// Count of `SYSCALL` instructions.
    pub inst_system: u64,

    /// Unsupported words stepped over under the skip policy.
    pub skipped: u64,
}

impl Default for SimStats {
    /// Returns zeroed counters with the host clock started now.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_muldiv: 0,
            inst_move: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            branches_taken: 0,
            inst_jump: 0,
            inst_system: 0,
            skipped: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"branch"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "branch"];

/// Host-side throughput figures derived from the counters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    /// Wall-clock seconds since the counters were reset.
    pub host_seconds: f64,
    /// Retired instructions per host second, in millions.
    pub mips: f64,
}

impl SimStats {
    /// Records one committed instruction.
    pub fn record(&mut self, retired: &Retired) {
        self.cycles += 1;
        self.instructions_retired += 1;
        match retired.decoded.op.class() {
            InstClass::Alu => self.inst_alu += 1,
            InstClass::MulDiv => self.inst_muldiv += 1,
            InstClass::Move => self.inst_move += 1,
            InstClass::Load => self.inst_load += 1,
            InstClass::Store => self.inst_store += 1,
            InstClass::Branch => {
                self.inst_branch += 1;
                if retired.effects.branch_taken == Some(true) {
                    self.branches_taken += 1;
                }
            }
            InstClass::Jump => self.inst_jump += 1,
            InstClass::System => self.inst_system += 1,
            InstClass::Unknown => {}
        }
    }

    /// Records one cycle that stepped over an unsupported word.
    pub fn record_skip(&mut self) {
        self.cycles += 1;
        self.skipped += 1;
    }

    /// Computes host throughput figures.
    pub fn summary(&self) -> Summary {
        let host_seconds = self.start_time.elapsed().as_secs_f64();
        let mips = if host_seconds > 0.0 {
            (self.instructions_retired as f64 / host_seconds) / 1_000_000.0
        } else {
            0.0
        };
        Summary { host_seconds, mips }
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        if want("summary") {
            let summary = self.summary();
            println!("\n==========================================================");
            println!("MIPS SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {:.4} s", summary.host_seconds);
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_skipped              {}", self.skipped);
            println!("sim_mips                 {:.2}", summary.mips);
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            println!("INSTRUCTION MIX");
            for (name, n) in [
                ("alu", self.inst_alu),
                ("muldiv", self.inst_muldiv),
                ("move", self.inst_move),
                ("load", self.inst_load),
                ("store", self.inst_store),
                ("branch", self.inst_branch),
                ("jump", self.inst_jump),
                ("system", self.inst_system),
            ] {
                println!("  op_type.{name:<15} {n} ({:.2}%)", pct(n));
            }
            println!("----------------------------------------------------------");
        }
        if want("branch") {
            let taken_rate = if self.inst_branch == 0 {
                0.0
            } else {
                (self.branches_taken as f64 / self.inst_branch as f64) * 100.0
            };
            println!("BRANCHES");
            println!("  branch.total           {}", self.inst_branch);
            println!("  branch.taken           {}", self.branches_taken);
            println!("  branch.taken_rate      {taken_rate:.2}%");
            println!("==========================================================");
        }
    }
}
