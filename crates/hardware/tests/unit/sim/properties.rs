//! # Whole-Program Properties
//!
//! Small programs checked end to end through the driver.

use mipsim_core::common::constants::TEXT_BASE;
use mipsim_core::config::Config;
use mipsim_core::isa::abi::{REG_RA, REG_T0, REG_T1, REG_T2};

use crate::common::builder::instruction::asm;
use crate::common::harness::TestContext;

const T0: u32 = REG_T0 as u32;
const T1: u32 = REG_T1 as u32;
const T2: u32 = REG_T2 as u32;

#[test]
fn test_add_of_opposites_is_zero() {
    let mut ctx = TestContext::new().load_program(&[
        asm().addi(T0, 0, 5).build(),
        asm().addi(T1, 0, -5).build(),
        asm().add(T2, T0, T1).build(),
    ]);
    let _ = ctx.run(3);
    assert_eq!(ctx.get_reg(REG_T2), 0);
}

#[test]
fn test_immediate_extension() {
    let mut ctx = TestContext::new().load_program(&[asm().addi(T0, 0, 0xFFFF).build()]);
    ctx.step();
    assert_eq!(ctx.get_reg(REG_T0), 0xFFFF_FFFF);

    let mut ctx = TestContext::new().load_program(&[asm().ori(T0, 0, 0xFFFF).build()]);
    ctx.step();
    assert_eq!(ctx.get_reg(REG_T0), 0x0000_FFFF);
}

#[test]
fn test_mult_overflows_into_hi() {
    let mut ctx = TestContext::new().load_program(&[
        asm().lui(T0, 1).build(),
        asm().lui(T1, 1).build(),
        asm().mult(T0, T1).build(),
    ]);
    let _ = ctx.run(3);
    assert_eq!(ctx.sim.read_hi(), 1);
    assert_eq!(ctx.sim.read_lo(), 0);
}

#[test]
fn test_store_word_then_load_word() {
    let config = Config::from_json(
        r#"{ "memory": { "regions": [
            { "name": "low", "begin": 0, "size": 4096 },
            { "name": "text", "begin": 4194304, "size": 4096 }
        ] } }"#,
    )
    .unwrap();
    let mut ctx = TestContext::with_config(&config).load_program(&[
        asm().addiu(T0, 0, 0x1234).build(),
        asm().sw(T0, 0, 0).build(),
        asm().lw(T1, 0, 0).build(),
    ]);
    let _ = ctx.run(3);
    assert_eq!(ctx.get_reg(REG_T1), ctx.get_reg(REG_T0));
}

#[test]
fn test_branch_targets() {
    let mut ctx = TestContext::new().load_program(&[asm().beq(T0, T1, 3).build()]);
    ctx.set_reg(REG_T1, 1);
    ctx.step();
    assert_eq!(ctx.pc(), TEXT_BASE + 4);

    let mut ctx = TestContext::new().load_program(&[asm().beq(T0, T1, 3).build()]);
    ctx.step();
    assert_eq!(ctx.pc(), TEXT_BASE + 4 + 12);

    let mut ctx = TestContext::new().load_program(&[
        asm().addiu(T0, 0, 0).build(),
        asm().bgez(T0, -2).build(),
    ]);
    let _ = ctx.run(2);
    assert_eq!(ctx.pc(), TEXT_BASE);
}

#[test]
fn test_jal_links_and_jumps() {
    let target = (TEXT_BASE + 0x40) >> 2;
    let mut ctx = TestContext::new().load_program(&[asm().jal(target).build()]);
    ctx.step();
    assert_eq!(ctx.get_reg(REG_RA), TEXT_BASE + 8);
    assert_eq!(ctx.pc(), TEXT_BASE + 0x40);
}

#[test]
fn test_zero_register_stays_zero() {
    let mut ctx = TestContext::new().load_program(&[asm().addiu(0, 0, 5).build()]);
    ctx.step();
    assert_eq!(ctx.get_reg(0), 0);
}

#[test]
fn test_syscall_freezes_until_reset() {
    let mut ctx = TestContext::new().load_program(&[asm().syscall().build()]);
    assert_eq!(ctx.run(5), 1);
    assert_eq!(ctx.run(5), 0);
    ctx.sim.initialize(TEXT_BASE).unwrap();
    assert_eq!(ctx.run(5), 1);
}

#[test]
fn test_out_of_range_words() {
    let mut ctx = TestContext::new();
    ctx.sim.write_word(0x0000_1000, 0xFFFF_FFFF);
    assert_eq!(ctx.sim.read_word(0x0000_1000), 0);
}

#[test]
fn test_out_of_range_write_leaves_regions_unchanged() {
    let config = Config::from_json(
        r#"{ "memory": { "regions": [
            { "name": "odd", "begin": 4098, "size": 16 },
            { "name": "text", "begin": 4194304, "size": 4096 }
        ] } }"#,
    )
    .unwrap();
    let mut ctx = TestContext::with_config(&config);
    ctx.sim.write_word(0x1010, 0x5566_7788);

    ctx.sim.write_word(0x1000, 0xAABB_CCDD);
    assert_eq!(ctx.sim.read_word(0x1000), 0);
    assert_eq!(ctx.sim.read_word(0x1002), 0);
    assert_eq!(ctx.sim.read_word(0x1010), 0x5566_7788);
}
