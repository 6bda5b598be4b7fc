//! # Disassembler Tests

use mipsim_core::isa::disasm::disassemble;
use rstest::rstest;

use crate::common::builder::instruction::asm;

#[rstest]
#[case(asm().add(10, 8, 9).build(), "add $t2, $t0, $t1")]
#[case(asm().subu(2, 4, 5).build(), "subu $v0, $a0, $a1")]
#[case(asm().nor(8, 0, 8).build(), "nor $t0, $zero, $t0")]
#[case(asm().sll(8, 9, 4).build(), "sll $t0, $t1, 4")]
#[case(asm().mult(8, 9).build(), "mult $t0, $t1")]
#[case(asm().mfhi(3).build(), "mfhi $v1")]
#[case(asm().mtlo(4).build(), "mtlo $a0")]
#[case(asm().jr(31).build(), "jr $ra")]
#[case(asm().jalr(31, 25).build(), "jalr $ra, $t9")]
#[case(asm().addi(8, 0, -5).build(), "addi $t0, $zero, -5")]
#[case(asm().ori(8, 0, 0xFFFF).build(), "ori $t0, $zero, 0xffff")]
#[case(asm().lui(1, 0x1001).build(), "lui $at, 0x1001")]
#[case(asm().lw(9, 0, 0).build(), "lw $t1, 0($zero)")]
#[case(asm().sb(8, 29, -4).build(), "sb $t0, -4($sp)")]
#[case(asm().beq(8, 9, -3).build(), "beq $t0, $t1, -3")]
#[case(asm().bgez(8, 2).build(), "bgez $t0, 2")]
#[case(asm().j(0x0010_0004).build(), "j 0x00400010")]
#[case(asm().syscall().build(), "syscall")]
fn test_disassemble(#[case] word: u32, #[case] text: &str) {
    assert_eq!(disassemble(word), text);
}

#[test]
fn test_unknown_shows_raw_word() {
    assert_eq!(disassemble(0xFC00_0000), "unknown (0xfc000000)");
}
