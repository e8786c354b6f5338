//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Instruction Fields:** Masks and shifts for the 16-bit instruction word.
//! 2. **Architectural Sizes:** Register count and the default memory capacities.

/// Bit position shift for the opcode field (bits 12-15).
pub const OPCODE_SHIFT: u16 = 12;

/// Bit mask for the opcode field after shifting (4 bits).
pub const OPCODE_MASK: u16 = 0xF;

/// Bit position shift for the first register field (bits 6-11).
pub const R1_SHIFT: u16 = 6;

/// Bit mask for a register index field after shifting (6 bits).
pub const REG_MASK: u16 = 0x3F;

/// Bit mask for the immediate / second register field (bits 0-5).
pub const IMM_MASK: u16 = 0x3F;

/// Largest value representable in the 6-bit immediate field.
pub const IMM_MAX: u8 = IMM_MASK as u8;

/// Number of general-purpose registers (`R0`-`R63`).
pub const NUM_REGISTERS: usize = 64;

/// Default instruction memory capacity in 16-bit words.
pub const INSTRUCTION_MEMORY_WORDS: usize = 1024;

/// Default data memory capacity in bytes.
pub const DATA_MEMORY_BYTES: usize = 2048;

/// Largest memory reachable with a 16-bit address.
pub const ADDRESS_SPACE: usize = 1 << 16;
