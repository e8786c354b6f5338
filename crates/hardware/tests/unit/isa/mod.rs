/// Assembler syntax and error reporting.
pub mod assembler;

/// Disassembler output format.
pub mod disasm;


/// Opcode table and format classification.
pub mod opcodes;
