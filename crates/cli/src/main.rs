//! MIPS32 cycle-accurate functional simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Batch run:** Load a program, run it to completion (or for a fixed number of cycles)
//!    and print the final state and statistics.
//! 2. **Shell:** The interactive MU-MIPS command loop.
//! 3. **Listing:** Disassemble a program file without executing it.

mod shell;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mipsim_core::config::Config;
use mipsim_core::isa::disasm::disassemble;
use mipsim_core::sim::{ProgramImage, Simulator};

use crate::shell::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS32 cycle-accurate functional simulator",
    long_about = "Run, step through or disassemble MIPS32 programs.\n\nPrograms are text files holding one hexadecimal instruction word per line.\n\nExamples:\n  mipsim run tests/addiu.in\n  mipsim run prog.in --cycles 100 --trace\n  mipsim shell prog.in\n  mipsim disasm prog.in"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until it halts.
    Run {
        /// Program file (one hex word per line).
        program: PathBuf,

        /// Stop after this many cycles even if the program has not halted.
        #[arg(short, long)]
        cycles: Option<u64>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Trace every committed instruction.
        #[arg(long)]
        trace: bool,

        /// Print statistics as JSON instead of the text report.
        #[arg(long)]
        stats_json: bool,
    },

    /// Start the interactive shell with a program loaded.
    Shell {
        /// Program file (one hex word per line).
        program: PathBuf,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Trace every committed instruction.
        #[arg(long)]
        trace: bool,
    },

    /// Print the disassembly of a program file.
    Disasm {
        /// Program file (one hex word per line).
        program: PathBuf,

        /// Address of the first word.
        #[arg(long, default_value_t = mipsim_core::common::constants::TEXT_BASE)]
        base: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            program,
            cycles,
            config,
            trace,
            stats_json,
        } => cmd_run(&program, cycles, config.as_deref(), trace, stats_json),
        Commands::Shell {
            program,
            config,
            trace,
        } => cmd_shell(&program, config.as_deref(), trace),
        Commands::Disasm { program, base } => cmd_disasm(&program, base),
    }
}

/// Installs the `tracing` subscriber on stderr.
///
/// `RUST_LOG` is honoured; `--trace` forces the `trace` level.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Loads the configuration file, or the defaults when none is given.
fn load_config(path: Option<&Path>, trace: bool) -> Result<Config> {
    let mut config = match path {
        Some(p) => {
            let text = fs::read_to_string(p)
                .with_context(|| format!("can't read configuration {}", p.display()))?;
            Config::from_json(&text)
                .with_context(|| format!("invalid configuration {}", p.display()))?
        }
        None => Config::default(),
    };
    config.general.trace_instructions |= trace;
    Ok(config)
}

/// Builds a simulator and loads the program into it.
fn build(program: &Path, config: &Config) -> Result<Simulator> {
    let image = ProgramImage::from_file(program)?;
    let mut sim = Simulator::new(config)?;
    sim.load_program(image)?;
    println!(
        "Program loaded into memory.\n{} words written into memory.\n",
        sim.program().len()
    );
    Ok(sim)
}

/// Runs a program to halt (or for `cycles` cycles) and reports the outcome.
///
/// A fault prints the register state and exits with code 1.
fn cmd_run(
    program: &Path,
    cycles: Option<u64>,
    config: Option<&Path>,
    trace: bool,
    stats_json: bool,
) -> Result<()> {
    init_tracing(trace);
    let config = load_config(config, trace)?;
    let mut sim = build(program, &config)?;

    let result = match cycles {
        Some(n) => sim.run(n),
        None => sim.run_to_halt(),
    };

    match result {
        Ok(executed) => {
            println!("Executed {executed} instruction(s).");
            match sim.halt_reason() {
                Some(reason) => println!("Halted: {reason:?}"),
                None => println!("Stopped at PC {:#010x} (not halted).", sim.read_pc()),
            }
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {} ({e})", e.source);
            dump_state(&sim);
            sim.stats().print();
            io::stdout().flush()?;
            process::exit(1);
        }
    }

    dump_state(&sim);
    if stats_json {
        let mut value = serde_json::to_value(sim.stats())?;
        if let Some(obj) = value.as_object_mut() {
            let _ = obj.insert(
                "summary".to_string(),
                serde_json::to_value(sim.stats().summary())?,
            );
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        sim.stats().print();
    }
    Ok(())
}

/// Starts the interactive shell on stdin/stdout.
fn cmd_shell(program: &Path, config: Option<&Path>, trace: bool) -> Result<()> {
    init_tracing(trace);
    let config = load_config(config, trace)?;
    let mut sim = build(program, &config)?;

    println!("**************************");
    println!("Welcome to MU-MIPS SIM...");
    println!("**************************\n");

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout());
    shell.run(&mut sim)
}

/// Prints the disassembly of every word in a program file.
fn cmd_disasm(program: &Path, base: u32) -> Result<()> {
    let image = ProgramImage::from_file(program)?;
    for (i, &word) in image.words().iter().enumerate() {
        let addr = ProgramImage::address_of(base, i);
        println!("[{addr:#010x}]\t{word:#010x}\t{}", disassemble(word));
    }
    Ok(())
}

/// Prints PC, registers, HI and LO.
fn dump_state(sim: &Simulator) {
    println!("PC = {:#010x}", sim.read_pc());
    print!("{}", sim.cpu().current.gpr);
    println!("HI = {:#010x}  LO = {:#010x}", sim.read_hi(), sim.read_lo());
}
