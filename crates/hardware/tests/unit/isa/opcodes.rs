//! Opcode Table Tests.

use pipesim_core::isa::opcodes::{Format, Opcode};
use rstest::rstest;

#[rstest]
#[case(0, Opcode::Add, "ADD", Format::Register)]
#[case(1, Opcode::Sub, "SUB", Format::Register)]
#[case(2, Opcode::Mul, "MUL", Format::Register)]
#[case(3, Opcode::Ldi, "LDI", Format::Immediate)]
#[case(4, Opcode::Beqz, "BEQZ", Format::Immediate)]
#[case(5, Opcode::And, "AND", Format::Register)]
#[case(6, Opcode::Or, "OR", Format::Register)]
#[case(7, Opcode::Jr, "JR", Format::Register)]
#[case(8, Opcode::Slc, "SLC", Format::Immediate)]
#[case(9, Opcode::Src, "SRC", Format::Immediate)]
#[case(10, Opcode::Lb, "LB", Format::Immediate)]
#[case(11, Opcode::Sb, "SB", Format::Immediate)]
fn opcode_encoding(
    #[case] bits: u8,
    #[case] op: Opcode,
    #[case] mnemonic: &str,
    #[case] format: Format,
) {
    assert_eq!(Opcode::from_bits(bits), Some(op));
    assert_eq!(op.bits(), bits);
    assert_eq!(op.mnemonic(), mnemonic);
    assert_eq!(op.format(), format);
    assert_eq!(Opcode::from_mnemonic(&mnemonic.to_lowercase()), Some(op));
}

#[rstest]
fn unassigned_opcodes(#[values(12, 13, 14, 15)] bits: u8) {
    assert_eq!(Opcode::from_bits(bits), None);
}

#[test]
fn all_is_in_encoding_order() {
    for (i, op) in Opcode::ALL.iter().enumerate() {
        assert_eq!(usize::from(op.bits()), i);
    }
}

#[test]
fn unknown_mnemonic() {
    assert_eq!(Opcode::from_mnemonic("NOP"), None);
}
