//! Interactive command shell.
//!
//! Reads one command per line and drives a [`Simulator`]. It provides:
//! 1. **Execution:** `sim` (run to halt) and `run <n>`.
//! 2. **Inspection:** `rdump`, `mdump <start> <stop>` and `print`.
//! 3. **Patching:** `input <reg> <value>`, `high <value>` and `low <value>`, which
//!    write both architectural snapshots.
//! 4. **Lifecycle:** `reset`, `?` and `quit`.
//!
//! The shell is generic over its input and output so it can be driven from tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};
use mipsim_core::Simulator;
use mipsim_core::common::RunError;
use mipsim_core::isa::abi;
use mipsim_core::sim::HaltReason;

/// Prompt printed before every command.
const PROMPT: &str = "MU-MIPS SIM:> ";

/// Command help, printed by `?`.
const HELP: &str = "\
------------------------------------------------------------------
sim                 -- run to completion
run <n>             -- run <n> instructions
rdump               -- dump register values
mdump <start> <stop> -- dump memory from <start> to <stop> (hex)
reset               -- reset registers and memory, reload the program
input <reg> <val>   -- set GPR <reg> to <val>
high <val>          -- set HI to <val>
low <val>           -- set LO to <val>
print               -- print the loaded program
?                   -- display this help menu
quit                -- exit the simulator
------------------------------------------------------------------";

/// What the read loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-oriented shell over a simulator.
#[derive(Debug)]
pub struct Shell<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell reading commands from `input` and writing to `out`.
    pub const fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Consumes the shell and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs commands until `quit` or end of input.
    ///
    /// Malformed commands and simulator faults are reported to the output
    /// and do not end the loop; only I/O errors are returned.
    pub fn run(&mut self, sim: &mut Simulator) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.out)?;
                return Ok(());
            }
            match self.execute(sim, line.trim()) {
                Ok(Flow::Quit) => {
                    writeln!(self.out, "Bye!")?;
                    return Ok(());
                }
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(self.out, "Error: {e:#}")?,
            }
        }
    }

    fn execute(&mut self, sim: &mut Simulator, line: &str) -> Result<Flow> {
        let mut args = line.split_whitespace();
        let Some(cmd) = args.next() else {
            return Ok(Flow::Continue);
        };

        match cmd.to_ascii_lowercase().as_str() {
            "sim" => {
                self.report_run(sim, |s| s.run_to_halt())?;
            }
            "run" => {
                let n = parse_count(next_arg(&mut args, "cycle count")?)?;
                self.report_run(sim, |s| s.run(n))?;
            }
            "rdump" => self.rdump(sim)?,
            "mdump" => {
                let start = parse_hex(next_arg(&mut args, "start address")?)?;
                let stop = parse_hex(next_arg(&mut args, "stop address")?)?;
                self.mdump(sim, start, stop)?;
            }
            "reset" => {
                sim.initialize(sim.load_base())?;
                writeln!(self.out, "Simulator reset.")?;
            }
            "input" => {
                let reg_text = next_arg(&mut args, "register")?;
                let reg = abi::parse(reg_text)
                    .ok_or_else(|| anyhow!("unknown register '{reg_text}'"))?;
                let val = parse_value(next_arg(&mut args, "value")?)?;
                sim.write_register(reg, val);
            }
            "high" => sim.write_hi(parse_value(next_arg(&mut args, "value")?)?),
            "low" => sim.write_lo(parse_value(next_arg(&mut args, "value")?)?),
            "print" => {
                for line in sim.program_listing() {
                    writeln!(self.out, "[{:#010x}]\t{:#010x}\t{}", line.addr, line.word, line.text)?;
                }
            }
            "?" | "help" => writeln!(self.out, "{HELP}")?,
            "quit" | "q" | "exit" => return Ok(Flow::Quit),
            other => bail!("unknown command '{other}' (type ? for help)"),
        }
        Ok(Flow::Continue)
    }

    fn report_run(
        &mut self,
        sim: &mut Simulator,
        run: impl FnOnce(&mut Simulator) -> Result<u64, RunError>,
    ) -> Result<()> {
        if sim.is_halted() {
            writeln!(
                self.out,
                "Simulator is halted; use 'reset' to run the program again."
            )?;
            return Ok(());
        }
        let executed = run(sim)?;
        writeln!(self.out, "Executed {executed} instruction(s).")?;
        if let Some(HaltReason::Syscall { v0 }) = sim.halt_reason() {
            writeln!(self.out, "Simulation finished (syscall, $v0 = {v0:#x}).")?;
        }
        Ok(())
    }

    fn rdump(&mut self, sim: &Simulator) -> Result<()> {
        writeln!(self.out, "-------------------------------------")?;
        writeln!(self.out, "Dumping Register Content")?;
        writeln!(self.out, "-------------------------------------")?;
        writeln!(self.out, "# Instructions Executed\t: {}", sim.instruction_count())?;
        writeln!(self.out, "PC\t: {:#010x}", sim.read_pc())?;
        writeln!(self.out, "-------------------------------------")?;
        write!(self.out, "{}", sim.cpu().current.gpr)?;
        writeln!(self.out, "-------------------------------------")?;
        writeln!(self.out, "[HI]\t: {:#010x}", sim.read_hi())?;
        writeln!(self.out, "[LO]\t: {:#010x}", sim.read_lo())?;
        writeln!(self.out, "-------------------------------------")?;
        Ok(())
    }

    fn mdump(&mut self, sim: &Simulator, start: u32, stop: u32) -> Result<()> {
        writeln!(self.out, "Memory content [{start:#010x}..{stop:#010x}] :")?;
        for (addr, word) in sim.dump_memory(start, stop) {
            writeln!(self.out, "\t{addr:#010x} ({addr}) :\t{word:#010x}")?;
        }
        Ok(())
    }
}

fn next_arg<'a>(args: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<&'a str> {
    args.next().with_context(|| format!("missing {what}"))
}

/// Parses a hexadecimal value with or without a `0x` prefix.
fn parse_hex(text: &str) -> Result<u32> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u32::from_str_radix(digits, 16).with_context(|| format!("'{text}' is not a hexadecimal value"))
}

/// Parses a non-negative cycle count, decimal or `0x`-prefixed hex.
fn parse_count(text: &str) -> Result<u64> {
    if text.starts_with("0x") || text.starts_with("0X") {
        return parse_hex(text).map(u64::from);
    }
    text.parse::<u64>().with_context(|| format!("'{text}' is not a cycle count"))
}

/// Parses `0x`-prefixed hex, or decimal (negative values are two's complement).
fn parse_value(text: &str) -> Result<u32> {
    if text.starts_with("0x") || text.starts_with("0X") {
        return parse_hex(text);
    }
    text.parse::<u32>()
        .or_else(|_| text.parse::<i32>().map(|v| v as u32))
        .with_context(|| format!("'{text}' is not a number"))
}
