//! MIPS32 Instruction Decoder.
//!
//! This module handles the decoding of 32-bit MIPS32 instruction encodings into
//! a structured `Decoded` format. Decoding is two-level:
//! 1. **Primary opcode:** Selects the operation directly for I- and J-format words.
//! 2. **Secondary selector:** `SPECIAL` words are resolved by the function code,
//!    `REGIMM` words by the `rt` field.
//!
//! Any pattern outside the supported subset decodes to `Op::Unknown`; decoding
//! itself never fails.

use crate::isa::instruction::{Decoded, InstructionBits, Op};
use crate::isa::mips32::{funct, opcodes, regimm};

/// Decodes a raw 32-bit instruction into its structured representation.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
///
/// # Returns
///
/// A `Decoded` struct holding the tagged operation and every extracted field.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();

    let op = match opcode {
        opcodes::SPECIAL => decode_special(inst.funct()),
        opcodes::REGIMM => decode_regimm(inst.rt() as u32),
        opcodes::J => Op::J,
        opcodes::JAL => Op::Jal,
        opcodes::BEQ => Op::Beq,
        opcodes::BNE => Op::Bne,
        opcodes::BLEZ => Op::Blez,
        opcodes::BGTZ => Op::Bgtz,
        opcodes::ADDI => Op::Addi,
        opcodes::ADDIU => Op::Addiu,
        opcodes::SLTI => Op::Slti,
        opcodes::ANDI => Op::Andi,
        opcodes::ORI => Op::Ori,
        opcodes::XORI => Op::Xori,
        opcodes::LUI => Op::Lui,
        opcodes::LB => Op::Lb,
        opcodes::LH => Op::Lh,
        opcodes::LW => Op::Lw,
        opcodes::SB => Op::Sb,
        opcodes::SH => Op::Sh,
        opcodes::SW => Op::Sw,
        _ => Op::Unknown,
    };

    Decoded {
        raw: inst,
        op,
        opcode,
        rs: inst.rs(),
        rt: inst.rt(),
        rd: inst.rd(),
        shamt: inst.shamt(),
        funct: inst.funct(),
        imm: inst.imm(),
        target: inst.target(),
    }
}

fn decode_special(code: u32) -> Op {
    match code {
        funct::SLL => Op::Sll,
        funct::SRL => Op::Srl,
        funct::SRA => Op::Sra,
        funct::JR => Op::Jr,
        funct::JALR => Op::Jalr,
        funct::SYSCALL => Op::Syscall,
        funct::MFHI => Op::Mfhi,
        funct::MTHI => Op::Mthi,
        funct::MFLO => Op::Mflo,
        funct::MTLO => Op::Mtlo,
        funct::MULT => Op::Mult,
        funct::MULTU => Op::Multu,
        funct::DIV => Op::Div,
        funct::DIVU => Op::Divu,
        funct::ADD => Op::Add,
        funct::ADDU => Op::Addu,
        funct::SUB => Op::Sub,
        funct::SUBU => Op::Subu,
        funct::AND => Op::And,
        funct::OR => Op::Or,
        funct::XOR => Op::Xor,
        funct::NOR => Op::Nor,
        funct::SLT => Op::Slt,
        _ => Op::Unknown,
    }
}

fn decode_regimm(rt: u32) -> Op {
    match rt {
        regimm::BLTZ => Op::Bltz,
        regimm::BGEZ => Op::Bgez,
        _ => Op::Unknown,
    }
}
