//! Major opcodes (bits 15-12) of the 16-bit instruction set.
//!
//! Twelve of the sixteen 4-bit codes are assigned. The remaining four
//! (`0b1100`-`0b1111`) are rejected by the decoder.

use std::fmt;

/// Operand layout of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Two registers: `R1` in bits 11-6, `R2` in bits 5-0.
    Register,
    /// One register and a 6-bit immediate in bits 5-0.
    Immediate,
}

/// The twelve recognized instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// `R1 = R1 + R2`.
    Add = 0b0000,
    /// `R1 = R1 - R2`.
    Sub = 0b0001,
    /// `R1 = R1 * R2`.
    Mul = 0b0010,
    /// `R1 = IMM`.
    Ldi = 0b0011,
    /// `if R1 == 0 { PC = PC + 1 + IMM }`.
    Beqz = 0b0100,
    /// `R1 = R1 & R2`.
    And = 0b0101,
    /// `R1 = R1 | R2`.
    Or = 0b0110,
    /// `PC = R1 || R2`.
    Jr = 0b0111,
    /// `R1 = R1 rotl IMM`.
    Slc = 0b1000,
    /// `R1 = R1 rotr IMM`.
    Src = 0b1001,
    /// `R1 = MEM[IMM]`.
    Lb = 0b1010,
    /// `MEM[IMM] = R1`.
    Sb = 0b1011,
}

impl Opcode {
    /// Every recognized opcode, in encoding order.
    pub const ALL: [Self; 12] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Ldi,
        Self::Beqz,
        Self::And,
        Self::Or,
        Self::Jr,
        Self::Slc,
        Self::Src,
        Self::Lb,
        Self::Sb,
    ];

    /// Maps a 4-bit opcode field to an instruction, or `None` if unassigned.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            0b0000 => Self::Add,
            0b0001 => Self::Sub,
            0b0010 => Self::Mul,
            0b0011 => Self::Ldi,
            0b0100 => Self::Beqz,
            0b0101 => Self::And,
            0b0110 => Self::Or,
            0b0111 => Self::Jr,
            0b1000 => Self::Slc,
            0b1001 => Self::Src,
            0b1010 => Self::Lb,
            0b1011 => Self::Sb,
            _ => return None,
        })
    }

    /// Returns the 4-bit encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Ldi => "LDI",
            Self::Beqz => "BEQZ",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Jr => "JR",
            Self::Slc => "SLC",
            Self::Src => "SRC",
            Self::Lb => "LB",
            Self::Sb => "SB",
        }
    }

    /// Looks up an opcode by mnemonic, ignoring ASCII case.
    pub fn from_mnemonic(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(text))
    }

    /// Returns whether bits 5-0 name a register or hold an immediate.
    pub const fn format(self) -> Format {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::And | Self::Or | Self::Jr => {
                Format::Register
            }
            Self::Ldi | Self::Beqz | Self::Slc | Self::Src | Self::Lb | Self::Sb => {
                Format::Immediate
            }
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
