//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the fields of a 16-bit instruction word and
//! the inverse packing used by the assembler:
//!
//! ```text
//!  15    12 11        6 5         0
//! +--------+-----------+-----------+
//! | opcode |    R1     |  R2 / IMM |
//! +--------+-----------+-----------+
//! ```

use crate::common::constants::{IMM_MASK, OPCODE_MASK, OPCODE_SHIFT, R1_SHIFT, REG_MASK};
use crate::isa::opcodes::Opcode;

/// Trait for extracting instruction fields from an encoded instruction.
///
/// Extraction is total: every 16-bit value yields a field value, whether or
/// not the opcode is recognized.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 12-15).
    fn opcode(&self) -> u8;

    /// Extracts the first register index (bits 6-11).
    fn r1(&self) -> usize;

    /// Extracts the second register index (bits 0-5).
    fn r2(&self) -> usize;

    /// Extracts the 6-bit immediate (bits 0-5, the same bits as `r2`).
    fn imm(&self) -> u8;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn r1(&self) -> usize {
        ((self >> R1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn r2(&self) -> usize {
        (self & REG_MASK) as usize
    }

    #[inline(always)]
    fn imm(&self) -> u8 {
        (self & IMM_MASK) as u8
    }
}

/// Packs raw field values into an instruction word.
///
/// Each field is masked to its width, so `encode_fields(w.opcode(), w.r1(), w.r2())`
/// reproduces `w` for any word `w`.
pub const fn encode_fields(opcode: u8, r1: usize, low: usize) -> u16 {
    ((opcode as u16 & OPCODE_MASK) << OPCODE_SHIFT)
        | ((r1 as u16 & REG_MASK) << R1_SHIFT)
        | (low as u16 & IMM_MASK)
}

/// Encodes a register-format instruction (`ADD R1 R2`).
pub const fn encode_reg(opcode: Opcode, r1: usize, r2: usize) -> u16 {
    encode_fields(opcode.bits(), r1, r2)
}

/// Encodes an immediate-format instruction (`LDI R1 5`).
pub const fn encode_imm(opcode: Opcode, r1: usize, imm: u8) -> u16 {
    encode_fields(opcode.bits(), r1, imm as usize)
}
