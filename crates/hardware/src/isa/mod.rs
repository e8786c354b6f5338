//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode map, the 16-bit field layout, and the text
//! translation in both directions.
//!
//! * `opcodes`: The twelve 4-bit opcodes and their operand formats.
//! * `instruction`: Field extraction and packing for instruction words.
//! * `asm` / `disasm`: Assembly text to machine word, and back.

/// Line assembler producing 16-bit instruction words.
pub mod asm;

/// Instruction disassembler for trace logging and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Opcode table and operand formats.
pub mod opcodes;

pub use instruction::InstructionBits;
pub use opcodes::{Format, Opcode};
