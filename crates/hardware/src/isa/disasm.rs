//! Instruction Disassembler.
//!
//! Converts a 16-bit instruction encoding into the assembler syntax for
//! trace logging and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use pipesim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x3045), "LDI R1 5");
//! ```

use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::{Format, Opcode};

/// Disassembles a 16-bit instruction into a human-readable string.
///
/// Returns a line like `"ADD R1 R2"` or `"LDI R1 5"`, or `"unknown"` for
/// unassigned opcodes. The output assembles back to the same word.
pub fn disassemble(inst: u16) -> String {
    let Some(op) = Opcode::from_bits(inst.opcode()) else {
        return "unknown".to_string();
    };
    match op.format() {
        Format::Register => format!("{} R{} R{}", op, inst.r1(), inst.r2()),
        Format::Immediate => format!("{} R{} {}", op, inst.r1(), inst.imm()),
    }
}
