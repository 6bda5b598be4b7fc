//! # Simulator Driver Tests
//!
//! Lifecycle transitions, halt reasons, the unsupported-word policy and the
//! inspection helpers used by the shell.

use mipsim_core::common::constants::{DATA_BASE, TEXT_BASE};
use mipsim_core::common::{ExecError, RunError, SimError};
use mipsim_core::config::{Config, UnsupportedPolicy};
use mipsim_core::isa::abi::{REG_T0, REG_T1, REG_V0};
use mipsim_core::sim::{HaltReason, RunState};
use mipsim_core::{ProgramImage, Simulator};
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::asm;
use crate::common::harness::TestContext;

fn exit_program() -> Vec<u32> {
    vec![
        asm().addiu(REG_T0 as u32, 0, 5).build(),
        asm().addiu(REG_V0 as u32, 0, 10).build(),
        asm().syscall().build(),
        asm().addiu(REG_T0 as u32, 0, 99).build(),
    ]
}

#[test]
fn test_new_simulator_is_ready_at_text_base() {
    let ctx = TestContext::new();
    assert_eq!(ctx.sim.status(), RunState::Ready);
    assert_eq!(ctx.pc(), TEXT_BASE);
    assert_eq!(ctx.sim.instruction_count(), 0);
    assert_eq!(ctx.sim.halt_reason(), None);
}

#[test]
fn test_step_moves_to_running() {
    let mut ctx = TestContext::new().load_program(&exit_program());
    ctx.step();
    assert_eq!(ctx.sim.status(), RunState::Running);
    assert_eq!(ctx.get_reg(REG_T0), 5);
}

#[test]
fn test_syscall_halts_with_v0() {
    let mut ctx = TestContext::new().load_program(&exit_program());
    assert_eq!(ctx.run(100), 3);
    assert!(ctx.sim.is_halted());
    assert_eq!(ctx.sim.halt_reason(), Some(HaltReason::Syscall { v0: 10 }));
    assert_eq!(ctx.pc(), TestContext::addr(3));
    assert_eq!(ctx.get_reg(REG_T0), 5);
}

#[test]
fn test_halted_simulator_runs_nothing() {
    let mut ctx = TestContext::new().load_program(&exit_program());
    let _ = ctx.run(10);
    assert_eq!(ctx.run(10), 0);
    assert!(!ctx.try_step().unwrap());
    assert_eq!(ctx.sim.instruction_count(), 3);
}

#[test]
fn test_stop_then_reset_returns_to_ready() {
    let mut ctx = TestContext::new().load_program(&exit_program());
    ctx.step();
    ctx.sim.stop();
    assert_eq!(ctx.sim.halt_reason(), Some(HaltReason::Stopped));
    assert_eq!(ctx.run(5), 0);

    ctx.sim
        .reset(ProgramImage::from_words(exit_program()))
        .unwrap();
    assert_eq!(ctx.sim.status(), RunState::Ready);
    assert_eq!(ctx.get_reg(REG_T0), 0);
    assert_eq!(ctx.pc(), TEXT_BASE);
    assert_eq!(ctx.run(10), 3);
}

#[test]
fn test_stop_keeps_first_reason() {
    let mut ctx = TestContext::new().load_program(&exit_program());
    let _ = ctx.run(10);
    ctx.sim.stop();
    assert_eq!(ctx.sim.halt_reason(), Some(HaltReason::Syscall { v0: 10 }));
}

#[test]
fn test_unsupported_word_halts_by_default() {
    let mut ctx = TestContext::new().load_program(&[asm().addiu(8, 0, 1).build(), 0xFC00_0000]);
    ctx.step();
    let err = ctx.try_step().unwrap_err();
    let fault = ExecError::UnsupportedInstruction {
        pc: TestContext::addr(1),
        word: 0xFC00_0000,
    };
    assert_eq!(err, SimError::Exec(fault));
    assert_eq!(ctx.sim.halt_reason(), Some(HaltReason::Fault(fault)));
    assert_eq!(ctx.pc(), TestContext::addr(1));
    assert_eq!(ctx.sim.instruction_count(), 1);
}

#[test]
fn test_run_reports_cycles_committed_before_fault() {
    let mut ctx = TestContext::new().load_program(&[
        asm().addiu(8, 0, 1).build(),
        asm().addiu(9, 0, 2).build(),
        0xFC00_0000,
    ]);
    let err = ctx.sim.run(10).unwrap_err();
    let fault = ExecError::UnsupportedInstruction {
        pc: TestContext::addr(2),
        word: 0xFC00_0000,
    };
    assert_eq!(
        err,
        RunError {
            executed: 2,
            source: SimError::Exec(fault),
        }
    );
    assert_eq!(ctx.sim.instruction_count(), 2);
    assert_eq!(ctx.get_reg(9), 2);
}

#[test]
fn test_run_to_halt_reports_cycles_before_fault() {
    let mut ctx = TestContext::new()
        .load_program(&[asm().addiu(8, 0, 1).build(), asm().div(8, 0).build()]);
    let err = ctx.sim.run_to_halt().unwrap_err();
    assert_eq!(err.executed, 1);
    assert!(matches!(err.source, SimError::Exec(ExecError::DivisionByZero { .. })));
}

#[test]
fn test_skip_policy_steps_over_unsupported_words() {
    let mut config = Config::default();
    config.general.on_unsupported = UnsupportedPolicy::Skip;
    let mut ctx = TestContext::with_config(&config).load_program(&[
        0xFC00_0000,
        asm().addiu(8, 0, 1).build(),
        asm().syscall().build(),
    ]);
    assert_eq!(ctx.run(10), 3);
    assert_eq!(ctx.get_reg(8), 1);
    assert_eq!(ctx.sim.stats().skipped, 1);
    assert_eq!(ctx.sim.stats().cycles, 3);
    assert_eq!(ctx.sim.stats().instructions_retired, 2);
}

#[test]
fn test_division_by_zero_halts_even_when_skipping() {
    let mut config = Config::default();
    config.general.on_unsupported = UnsupportedPolicy::Skip;
    let mut ctx = TestContext::with_config(&config).load_program(&[asm().div(8, 0).build()]);
    ctx.sim.write_hi(3);
    assert!(ctx.try_step().is_err());
    assert!(ctx.sim.is_halted());
    assert_eq!(ctx.sim.read_hi(), 3);
    assert_eq!(ctx.pc(), TEXT_BASE);
}

#[test]
fn test_run_to_halt_respects_max_cycles() {
    let mut config = Config::default();
    config.general.max_cycles = Some(4);
    let spin = asm().beq(0, 0, -1).build();
    let mut ctx = TestContext::with_config(&config).load_program(&[spin]);
    assert_eq!(ctx.sim.run_to_halt().unwrap(), 4);
    assert!(!ctx.sim.is_halted());
    assert_eq!(ctx.pc(), TEXT_BASE);
}

#[test]
fn test_run_to_halt_unbounded() {
    let mut ctx = TestContext::new().load_program(&exit_program());
    assert_eq!(ctx.sim.run_to_halt().unwrap(), 3);
}

#[test]
fn test_register_patches_survive_next_cycle() {
    let mut ctx = TestContext::new().load_program(&[asm().addu(10, 8, 9).build()]);
    ctx.set_reg(REG_T0, 40);
    ctx.set_reg(REG_T1, 2);
    ctx.sim.write_lo(7);
    ctx.step();
    assert_eq!(ctx.get_reg(10), 42);
    assert_eq!(ctx.sim.read_lo(), 7);
}

#[test]
fn test_initialize_at_other_base() {
    let mut ctx = TestContext::new().load_program(&exit_program());
    ctx.sim.initialize(DATA_BASE).unwrap();
    assert_eq!(ctx.sim.load_base(), DATA_BASE);
    assert_eq!(ctx.pc(), DATA_BASE);
    assert_eq!(ctx.sim.read_word(DATA_BASE + 8), asm().syscall().build());
    assert_eq!(ctx.sim.read_word(TEXT_BASE), 0);
}

#[test]
fn test_program_listing_reflects_memory() {
    let mut ctx = TestContext::new().load_program(&exit_program());
    ctx.sim.write_word(TestContext::addr(0), 0);
    let listing = ctx.sim.program_listing();
    assert_eq!(listing.len(), 4);
    assert_eq!(listing[0].text, "sll $zero, $zero, 0");
    assert_eq!(listing[2].addr, TestContext::addr(2));
    assert_eq!(listing[2].text, "syscall");
}

#[test]
fn test_dump_memory_is_inclusive() {
    let ctx = TestContext::new().load_program(&exit_program());
    let dump: Vec<_> = ctx.sim.dump_memory(TEXT_BASE, TEXT_BASE + 8).collect();
    assert_eq!(dump.len(), 3);
    assert_eq!(dump[2], (TEXT_BASE + 8, asm().syscall().build()));
    assert_eq!(ctx.sim.dump_memory(TEXT_BASE + 4, TEXT_BASE).count(), 0);
    assert_eq!(ctx.sim.dump_memory(0xFFFF_FFFC, 0xFFFF_FFFF).count(), 1);
}

#[test]
fn test_dump_memory_spans_address_space_lazily() {
    let ctx = TestContext::new().load_program(&exit_program());
    let head: Vec<_> = ctx.sim.dump_memory(0, u32::MAX).take(2).collect();
    assert_eq!(head, vec![(0, 0), (4, 0)]);

    let mut from_text = ctx.sim.dump_memory(TEXT_BASE, u32::MAX);
    assert_eq!(from_text.nth(2), Some((TEXT_BASE + 8, asm().syscall().build())));
}

#[test]
fn test_decode_for_display_has_no_side_effects() {
    let ctx = TestContext::new().load_program(&exit_program());
    assert_eq!(ctx.sim.decode_for_display(asm().syscall().build()), "syscall");
    assert_eq!(ctx.sim.status(), RunState::Ready);
    assert_eq!(ctx.sim.instruction_count(), 0);
}

#[test]
fn test_oversized_program_is_rejected() {
    let config = Config::from_json(
        r#"{ "memory": { "regions": [ { "name": "text", "begin": 4194304, "size": 8 } ] } }"#,
    )
    .unwrap();
    let mut sim = Simulator::new(&config).unwrap();
    assert!(sim.load_program(ProgramImage::from_words(vec![0; 3])).is_err());
}

#[test]
fn test_failed_reset_keeps_previous_program() {
    let config = Config::from_json(
        r#"{ "memory": { "regions": [ { "name": "text", "begin": 4194304, "size": 16 } ] } }"#,
    )
    .unwrap();
    let mut sim = Simulator::new(&config).unwrap();
    sim.load_program(ProgramImage::from_words(exit_program())).unwrap();
    let _ = sim.step().unwrap();

    assert!(sim.reset(ProgramImage::from_words(vec![0; 5])).is_err());
    assert!(sim.load_program(ProgramImage::from_words(vec![0; 5])).is_err());
    assert_eq!(sim.instruction_count(), 1);
    assert_eq!(sim.status(), RunState::Running);
    assert_eq!(sim.program_listing().len(), 4);

    sim.initialize(TEXT_BASE).unwrap();
    assert_eq!(sim.run_to_halt().unwrap(), 3);
    assert_eq!(sim.halt_reason(), Some(HaltReason::Syscall { v0: 10 }));
}

#[test]
fn test_simulator_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Simulator>();
}
