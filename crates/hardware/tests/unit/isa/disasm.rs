//! Disassembler Output Tests.

use pipesim_core::isa::disasm::disassemble;
use pipesim_core::isa::opcodes::Opcode;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::{InstructionBuilder, imm, reg};

#[test]
fn register_format() {
    assert_eq!(disassemble(reg(Opcode::Add, 1, 2)), "ADD R1 R2");
    assert_eq!(disassemble(reg(Opcode::Jr, 63, 0)), "JR R63 R0");
}

#[test]
fn immediate_format() {
    assert_eq!(disassemble(imm(Opcode::Ldi, 1, 5)), "LDI R1 5");
    assert_eq!(disassemble(imm(Opcode::Beqz, 7, 63)), "BEQZ R7 63");
}

#[test]
fn unassigned_opcode_is_unknown() {
    let inst = InstructionBuilder::new().opcode(13).r1(1).low(2).build();
    assert_eq!(disassemble(inst), "unknown");
}

#[test]
fn every_opcode_round_trips_through_assembler() {
    for op in Opcode::ALL {
        let word = match op.format() {
            pipesim_core::isa::opcodes::Format::Register => reg(op, 4, 9),
            pipesim_core::isa::opcodes::Format::Immediate => imm(op, 4, 9),
        };
        let text = disassemble(word);
        let back = pipesim_core::isa::asm::assemble_line(1, &text).unwrap();
        assert_eq!(back, word, "{text}");
    }
}
