//! Assembler Tests.

use pipesim_core::common::{AssembleError, AssembleErrorKind};
use pipesim_core::isa::asm::assemble_line;
use pipesim_core::isa::opcodes::Opcode;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::{imm, reg};

#[rstest]
#[case("ADD R1 R2", reg(Opcode::Add, 1, 2))]
#[case("sub r3, r4", reg(Opcode::Sub, 3, 4))]
#[case("  MUL R10 R11  # square", reg(Opcode::Mul, 10, 11))]
#[case("LDI R1 5", imm(Opcode::Ldi, 1, 5))]
#[case("BEQZ R0 63", imm(Opcode::Beqz, 0, 63))]
#[case("lb R2 0", imm(Opcode::Lb, 2, 0))]
fn assembles(#[case] line: &str, #[case] expected: u16) {
    assert_eq!(assemble_line(1, line).unwrap(), expected);
}

fn kind(line: &str) -> AssembleErrorKind {
    assemble_line(7, line).unwrap_err().kind
}

#[test]
fn unknown_mnemonic() {
    assert_eq!(kind("XOR R1 R2"), AssembleErrorKind::UnknownMnemonic("XOR".into()));
}

#[test]
fn wrong_operand_count() {
    assert_eq!(
        kind("ADD R1"),
        AssembleErrorKind::OperandCount {
            mnemonic: "ADD",
            expected: 2,
            found: 1
        }
    );
}

#[rstest]
#[case("ADD R64 R1", "R64")]
#[case("ADD X1 R1", "X1")]
#[case("ADD R1 5", "5")]
fn bad_register(#[case] line: &str, #[case] operand: &str) {
    assert_eq!(kind(line), AssembleErrorKind::InvalidRegister(operand.into()));
}

#[rstest]
#[case("LDI R1 64", "64")]
#[case("LDI R1 -1", "-1")]
#[case("LDI R1 R2", "R2")]
fn bad_immediate(#[case] line: &str, #[case] operand: &str) {
    assert_eq!(kind(line), AssembleErrorKind::InvalidImmediate(operand.into()));
}

#[test]
fn error_carries_line_and_text() {
    let err: AssembleError = assemble_line(12, "LDI R1 99 # too big").unwrap_err();
    assert_eq!(err.line, 12);
    assert_eq!(err.text, "LDI R1 99");
    assert!(err.to_string().starts_with("line 12:"));
}
