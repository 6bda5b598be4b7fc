//! Instruction Disassembler for MIPS32.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for instruction tracing, the program listing and the shell.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! let text = disassemble(0x0109_5020); // ADD $t2, $t0, $t1
//! assert_eq!(text, "add $t2, $t0, $t1");
//! ```

use crate::isa::abi;
use crate::isa::decode::decode;
use crate::isa::instruction::{Decoded, Op};

/// Returns the `$`-prefixed ABI name for a register index.
#[inline]
fn reg(idx: usize) -> String {
    format!("${}", abi::name(idx))
}

/// Disassembles a 32-bit MIPS32 instruction into a human-readable string.
///
/// Returns a mnemonic like `"addu $v0, $a0, $a1"`, or
/// `"unknown (0x........)"` for encodings outside the supported subset.
pub fn disassemble(inst: u32) -> String {
    format_decoded(&decode(inst))
}

/// Formats an already-decoded instruction.
///
/// Branch offsets are printed as signed word counts, exactly as encoded;
/// jump targets are printed as the raw field shifted into a byte address.
pub fn format_decoded(d: &Decoded) -> String {
    let m = d.op.mnemonic();
    match d.op {
        Op::Add
        | Op::Addu
        | Op::Sub
        | Op::Subu
        | Op::And
        | Op::Or
        | Op::Xor
        | Op::Nor
        | Op::Slt => format!("{m} {}, {}, {}", reg(d.rd), reg(d.rs), reg(d.rt)),
        Op::Mult | Op::Multu | Op::Div | Op::Divu => {
            format!("{m} {}, {}", reg(d.rs), reg(d.rt))
        }
        Op::Sll | Op::Srl | Op::Sra => {
            format!("{m} {}, {}, {}", reg(d.rd), reg(d.rt), d.shamt)
        }
        Op::Mfhi | Op::Mflo => format!("{m} {}", reg(d.rd)),
        Op::Mthi | Op::Mtlo | Op::Jr => format!("{m} {}", reg(d.rs)),
        Op::Jalr => format!("{m} {}, {}", reg(d.rd), reg(d.rs)),
        Op::Addi | Op::Addiu | Op::Slti => {
            format!("{m} {}, {}, {}", reg(d.rt), reg(d.rs), d.imm as i16)
        }
        Op::Andi | Op::Ori | Op::Xori => {
            format!("{m} {}, {}, {:#x}", reg(d.rt), reg(d.rs), d.imm)
        }
        Op::Lui => format!("{m} {}, {:#x}", reg(d.rt), d.imm),
        Op::Lw | Op::Lh | Op::Lb | Op::Sw | Op::Sh | Op::Sb => {
            format!("{m} {}, {}({})", reg(d.rt), d.imm as i16, reg(d.rs))
        }
        Op::Beq | Op::Bne => {
            format!("{m} {}, {}, {}", reg(d.rs), reg(d.rt), d.imm as i16)
        }
        Op::Blez | Op::Bltz | Op::Bgez | Op::Bgtz => {
            format!("{m} {}, {}", reg(d.rs), d.imm as i16)
        }
        Op::J | Op::Jal => format!("{m} {:#010x}", d.target << 2),
        Op::Syscall => m.to_string(),
        Op::Unknown => format!("unknown ({:#010x})", d.raw),
    }
}
