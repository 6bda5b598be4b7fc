//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions, the tagged operation enum and the
//! decoded-instruction structure for MIPS32 R/I/J-format encodings.

use crate::common::constants::JUMP_BANK_MASK;

/// Bit shift for the primary opcode field (bits 31-26).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the primary opcode and function fields (6 bits).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift for the `rs` field (bits 25-21).
pub const RS_SHIFT: u32 = 21;
/// Bit shift for the `rt` field (bits 20-16).
pub const RT_SHIFT: u32 = 16;
/// Bit shift for the `rd` field (bits 15-11).
pub const RD_SHIFT: u32 = 11;
/// Bit shift for the shift-amount field (bits 10-6).
pub const SHAMT_SHIFT: u32 = 6;
/// Bit mask for register and shift-amount fields (5 bits).
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the function field (bits 5-0).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the I-format immediate (bits 15-0).
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the J-format target (bits 25-0).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract all MIPS32 instruction fields from a 32-bit
/// instruction word. Extraction is pure masking; no field is interpreted.
pub trait InstructionBits {
    /// Extracts the primary opcode field (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 25-21).
    fn rs(&self) -> usize;

    /// Extracts the second source / target register field (bits 20-16).
    fn rt(&self) -> usize;

    /// Extracts the destination register field (bits 15-11).
    fn rd(&self) -> usize;

    /// Extracts the shift-amount field (bits 10-6).
    fn shamt(&self) -> u32;

    /// Extracts the function field (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate (bits 15-0).
    fn imm(&self) -> u16;

    /// Extracts the 26-bit jump target (bits 25-0).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Encoding format of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register format: `opcode | rs | rt | rd | shamt | funct`.
    R,
    /// Immediate format: `opcode | rs | rt | imm[15:0]`.
    I,
    /// Jump format: `opcode | target[25:0]`.
    J,
}

/// Broad category of an operation, used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstClass {
    /// Integer arithmetic, logic, compare, shift and `LUI`.
    Alu,
    /// Multiply/divide writing HI/LO.
    MulDiv,
    /// Moves between a GPR and HI/LO.
    Move,
    /// Memory loads.
    Load,
    /// Memory stores.
    Store,
    /// Conditional branches.
    Branch,
    /// Unconditional and register jumps.
    Jump,
    /// `SYSCALL`.
    System,
    /// Encodings outside the supported subset.
    Unknown,
}

/// Tagged operation produced by the decoder.
///
/// Every supported instruction has exactly one variant; anything else
/// decodes to [`Op::Unknown`], which the executor reports as an unsupported
/// instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Op {
    Add,
    Addu,
    Sub,
    Subu,
    Addi,
    Addiu,
    Mult,
    Multu,
    Div,
    Divu,
    And,
    Or,
    Xor,
    Nor,
    Andi,
    Ori,
    Xori,
    Slt,
    Slti,
    Sll,
    Srl,
    Sra,
    Mfhi,
    Mflo,
    Mthi,
    Mtlo,
    Lw,
    Lh,
    Lb,
    Sw,
    Sh,
    Sb,
    Lui,
    J,
    Jal,
    Jr,
    Jalr,
    Beq,
    Bne,
    Blez,
    Bltz,
    Bgez,
    Bgtz,
    Syscall,
    Unknown,
}

impl Op {
    /// Every supported operation, in encoding-table order.
    pub const ALL: [Self; 44] = [
        Self::Add,
        Self::Addu,
        Self::Sub,
        Self::Subu,
        Self::Addi,
        Self::Addiu,
        Self::Mult,
        Self::Multu,
        Self::Div,
        Self::Divu,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Nor,
        Self::Andi,
        Self::Ori,
        Self::Xori,
        Self::Slt,
        Self::Slti,
        Self::Sll,
        Self::Srl,
        Self::Sra,
        Self::Mfhi,
        Self::Mflo,
        Self::Mthi,
        Self::Mtlo,
        Self::Lw,
        Self::Lh,
        Self::Lb,
        Self::Sw,
        Self::Sh,
        Self::Sb,
        Self::Lui,
        Self::J,
        Self::Jal,
        Self::Jr,
        Self::Jalr,
        Self::Beq,
        Self::Bne,
        Self::Blez,
        Self::Bltz,
        Self::Bgez,
        Self::Bgtz,
        Self::Syscall,
    ];

    /// Returns the lowercase assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Addu => "addu",
            Self::Sub => "sub",
            Self::Subu => "subu",
            Self::Addi => "addi",
            Self::Addiu => "addiu",
            Self::Mult => "mult",
            Self::Multu => "multu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Nor => "nor",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Xori => "xori",
            Self::Slt => "slt",
            Self::Slti => "slti",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Mfhi => "mfhi",
            Self::Mflo => "mflo",
            Self::Mthi => "mthi",
            Self::Mtlo => "mtlo",
            Self::Lw => "lw",
            Self::Lh => "lh",
            Self::Lb => "lb",
            Self::Sw => "sw",
            Self::Sh => "sh",
            Self::Sb => "sb",
            Self::Lui => "lui",
            Self::J => "j",
            Self::Jal => "jal",
            Self::Jr => "jr",
            Self::Jalr => "jalr",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blez => "blez",
            Self::Bltz => "bltz",
            Self::Bgez => "bgez",
            Self::Bgtz => "bgtz",
            Self::Syscall => "syscall",
            Self::Unknown => "unknown",
        }
    }

    /// Returns the encoding format of the operation.
    pub const fn format(self) -> Format {
        match self {
            Self::Add
            | Self::Addu
            | Self::Sub
            | Self::Subu
            | Self::Mult
            | Self::Multu
            | Self::Div
            | Self::Divu
            | Self::And
            | Self::Or
            | Self::Xor
            | Self::Nor
            | Self::Slt
            | Self::Sll
            | Self::Srl
            | Self::Sra
            | Self::Mfhi
            | Self::Mflo
            | Self::Mthi
            | Self::Mtlo
            | Self::Jr
            | Self::Jalr
            | Self::Syscall
            | Self::Unknown => Format::R,
            Self::J | Self::Jal => Format::J,
            _ => Format::I,
        }
    }

    /// Returns the statistics category of the operation.
    pub const fn class(self) -> InstClass {
        match self {
            Self::Mult | Self::Multu | Self::Div | Self::Divu => InstClass::MulDiv,
            Self::Mfhi | Self::Mflo | Self::Mthi | Self::Mtlo => InstClass::Move,
            Self::Lw | Self::Lh | Self::Lb => InstClass::Load,
            Self::Sw | Self::Sh | Self::Sb => InstClass::Store,
            Self::Beq | Self::Bne | Self::Blez | Self::Bltz | Self::Bgez | Self::Bgtz => {
                InstClass::Branch
            }
            Self::J | Self::Jal | Self::Jr | Self::Jalr => InstClass::Jump,
            Self::Syscall => InstClass::System,
            Self::Unknown => InstClass::Unknown,
            _ => InstClass::Alu,
        }
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Fields are extracted for every format regardless of `op`; consumers read
/// only the ones meaningful for the operation. The immediate is kept raw so
/// each instruction can pick its own extension policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Tagged operation.
    pub op: Op,
    /// Primary opcode field.
    pub opcode: u32,
    /// First source register index.
    pub rs: usize,
    /// Second source / target register index.
    pub rt: usize,
    /// Destination register index (R-format).
    pub rd: usize,
    /// Shift amount (R-format).
    pub shamt: u32,
    /// Function code (R-format).
    pub funct: u32,
    /// Raw 16-bit immediate (I-format).
    pub imm: u16,
    /// Raw 26-bit jump target (J-format).
    pub target: u32,
}

impl Decoded {
    /// Returns the immediate sign-extended to 32 bits (bit 15 replicated).
    ///
    /// Used by arithmetic, compare, load/store and branch instructions.
    #[inline]
    pub const fn imm_sext(&self) -> u32 {
        self.imm as i16 as i32 as u32
    }

    /// Returns the immediate zero-extended to 32 bits.
    ///
    /// Used by `ANDI`, `ORI` and `XORI`.
    #[inline]
    pub const fn imm_zext(&self) -> u32 {
        self.imm as u32
    }

    /// Returns the branch displacement in bytes: the sign-extended word
    /// offset scaled by 4.
    #[inline]
    pub const fn branch_offset(&self) -> u32 {
        self.imm_sext() << 2
    }

    /// Returns the absolute `J`/`JAL` destination for an instruction at `pc`.
    ///
    /// The upper four bits come from `pc`; the target field supplies the
    /// word-aligned remainder.
    #[inline]
    pub const fn jump_target(&self, pc: u32) -> u32 {
        (pc & JUMP_BANK_MASK) | (self.target << 2)
    }

    /// Returns `true` if the word decoded to a supported operation.
    #[inline]
    pub fn is_supported(&self) -> bool {
        self.op != Op::Unknown
    }
}
