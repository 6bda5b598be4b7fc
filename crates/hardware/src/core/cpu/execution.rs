//! Instruction Execution.
//!
//! This module implements the pure step function of the CPU. It performs the following:
//! 1. **Operand Read:** All register operands come from the current snapshot.
//! 2. **Computation:** Dispatches to the ALU, branch and load/store units.
//! 3. **Effect Collection:** Returns every state change as an `Effects` value
//!    instead of applying it, so a faulting instruction leaves no trace.

use crate::common::constants::{INSTRUCTION_SIZE, LINK_OFFSET};
use crate::common::data::AccessWidth;
use crate::common::error::ExecError;
use crate::core::arch::ArchState;
use crate::core::units::alu::{Alu, AluOp, MulDivOp, arithmetic};
use crate::core::units::bru::{BranchCond, Bru};
use crate::core::units::lsu::Lsu;
use crate::isa::abi;
use crate::isa::instruction::{Decoded, Op};
use crate::soc::traits::Bus;

/// State changes produced by executing one instruction.
///
/// At most one register, one memory word and each of `HI`/`LO` can change
/// per instruction. `next_pc` is always set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Effects {
    /// Destination register and value. Writes to `$0` are discarded on apply.
    pub reg_write: Option<(usize, u32)>,
    /// New `HI` value.
    pub hi: Option<u32>,
    /// New `LO` value.
    pub lo: Option<u32>,
    /// Aligned word address and the full word to store there.
    pub mem_write: Option<(u32, u32)>,
    /// Address of the next instruction.
    pub next_pc: u32,
    /// Set by `SYSCALL`: the run flag drops after this instruction commits.
    pub halt: bool,
    /// `Some(taken)` for conditional branches.
    pub branch_taken: Option<bool>,
}

impl Effects {
    /// Effects of an instruction that only advances the program counter.
    pub const fn sequential(pc: u32) -> Self {
        Self {
            reg_write: None,
            hi: None,
            lo: None,
            mem_write: None,
            next_pc: pc.wrapping_add(INSTRUCTION_SIZE),
            halt: false,
            branch_taken: None,
        }
    }

    /// Applies the register-side effects to `next`.
    pub fn apply(&self, next: &mut ArchState) {
        if let Some((idx, val)) = self.reg_write {
            next.gpr.write(idx, val);
        }
        if let Some(hi) = self.hi {
            next.hi = hi;
        }
        if let Some(lo) = self.lo {
            next.lo = lo;
        }
        next.pc = self.next_pc;
    }
}

/// Executes one decoded instruction against the current state.
///
/// # Arguments
///
/// * `d`     - The decoded instruction fetched from `state.pc`.
/// * `state` - The current architectural snapshot. Never modified.
/// * `bus`   - Memory, read-only. Loads and sub-word stores read exactly one aligned word.
///
/// # Returns
///
/// The instruction's effects, or an `ExecError` for an unsupported encoding
/// or a zero divisor.
pub fn execute<B: Bus + ?Sized>(
    d: &Decoded,
    state: &ArchState,
    bus: &B,
) -> Result<Effects, ExecError> {
    let pc = state.pc;
    let rs = state.gpr.read(d.rs);
    let rt = state.gpr.read(d.rt);
    let mut fx = Effects::sequential(pc);

    match d.op {
        Op::Add | Op::Addu => fx.reg_write = Some((d.rd, Alu::execute(AluOp::Add, rs, rt))),
        Op::Sub | Op::Subu => fx.reg_write = Some((d.rd, Alu::execute(AluOp::Sub, rs, rt))),
        Op::And => fx.reg_write = Some((d.rd, Alu::execute(AluOp::And, rs, rt))),
        Op::Or => fx.reg_write = Some((d.rd, Alu::execute(AluOp::Or, rs, rt))),
        Op::Xor => fx.reg_write = Some((d.rd, Alu::execute(AluOp::Xor, rs, rt))),
        Op::Nor => fx.reg_write = Some((d.rd, Alu::execute(AluOp::Nor, rs, rt))),
        Op::Slt => fx.reg_write = Some((d.rd, Alu::execute(AluOp::Slt, rs, rt))),

        Op::Sll => fx.reg_write = Some((d.rd, Alu::execute(AluOp::Sll, rt, d.shamt))),
        Op::Srl => fx.reg_write = Some((d.rd, Alu::execute(AluOp::Srl, rt, d.shamt))),
        Op::Sra => fx.reg_write = Some((d.rd, Alu::execute(AluOp::Sra, rt, d.shamt))),

        Op::Addi | Op::Addiu => {
            fx.reg_write = Some((d.rt, Alu::execute(AluOp::Add, rs, d.imm_sext())));
        }
        Op::Slti => fx.reg_write = Some((d.rt, Alu::execute(AluOp::Slt, rs, d.imm_sext()))),
        Op::Andi => fx.reg_write = Some((d.rt, Alu::execute(AluOp::And, rs, d.imm_zext()))),
        Op::Ori => fx.reg_write = Some((d.rt, Alu::execute(AluOp::Or, rs, d.imm_zext()))),
        Op::Xori => fx.reg_write = Some((d.rt, Alu::execute(AluOp::Xor, rs, d.imm_zext()))),
        Op::Lui => fx.reg_write = Some((d.rt, Alu::execute(AluOp::Lui, 0, d.imm_zext()))),

        Op::Mult | Op::Multu | Op::Div | Op::Divu => {
            let op = match d.op {
                Op::Mult => MulDivOp::Mult,
                Op::Multu => MulDivOp::Multu,
                Op::Div => MulDivOp::Div,
                _ => MulDivOp::Divu,
            };
            let result = arithmetic::mul_div(op, rs, rt)
                .ok_or(ExecError::DivisionByZero { pc, word: d.raw })?;
            fx.hi = Some(result.hi);
            fx.lo = Some(result.lo);
        }

        Op::Mfhi => fx.reg_write = Some((d.rd, state.hi)),
        Op::Mflo => fx.reg_write = Some((d.rd, state.lo)),
        Op::Mthi => fx.hi = Some(rs),
        Op::Mtlo => fx.lo = Some(rs),

        Op::Lw | Op::Lh | Op::Lb => {
            let addr = Lsu::effective_address(rs, d.imm_sext());
            let word = bus.read_u32(Lsu::word_address(addr));
            fx.reg_write = Some((d.rt, Lsu::extract(word, addr, access_width(d.op))));
        }
        Op::Sw => {
            let addr = Lsu::effective_address(rs, d.imm_sext());
            fx.mem_write = Some((Lsu::word_address(addr), rt));
        }
        Op::Sh | Op::Sb => {
            let addr = Lsu::effective_address(rs, d.imm_sext());
            let aligned = Lsu::word_address(addr);
            let merged = Lsu::merge(bus.read_u32(aligned), addr, rt, access_width(d.op));
            fx.mem_write = Some((aligned, merged));
        }

        Op::J => fx.next_pc = d.jump_target(pc),
        Op::Jal => {
            fx.reg_write = Some((abi::REG_RA, pc.wrapping_add(LINK_OFFSET)));
            fx.next_pc = d.jump_target(pc);
        }
        Op::Jr => fx.next_pc = rs,
        Op::Jalr => {
            fx.reg_write = Some((d.rd, pc.wrapping_add(LINK_OFFSET)));
            fx.next_pc = rs;
        }

        Op::Beq | Op::Bne | Op::Blez | Op::Bltz | Op::Bgez | Op::Bgtz => {
            let cond = match d.op {
                Op::Beq => BranchCond::Eq,
                Op::Bne => BranchCond::Ne,
                Op::Blez => BranchCond::Lez,
                Op::Bltz => BranchCond::Ltz,
                Op::Bgez => BranchCond::Gez,
                _ => BranchCond::Gtz,
            };
            let taken = Bru::taken(cond, rs, rt);
            fx.next_pc = Bru::next_pc(pc, d.branch_offset(), taken);
            fx.branch_taken = Some(taken);
        }

        Op::Syscall => fx.halt = true,

        Op::Unknown => return Err(ExecError::UnsupportedInstruction { pc, word: d.raw }),
    }

    Ok(fx)
}

/// Access width of a load or store operation.
const fn access_width(op: Op) -> AccessWidth {
    match op {
        Op::Lb | Op::Sb => AccessWidth::Byte,
        Op::Lh | Op::Sh => AccessWidth::Half,
        _ => AccessWidth::Word,
    }
}
