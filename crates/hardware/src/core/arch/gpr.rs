//! General-Purpose Register File.
//!
//! This module implements the architectural register state. It performs the following:
//! 1. **Storage:** Maintains 64 eight-bit registers (`R0`-`R63`) and the 16-bit PC.
//! 2. **Bounds:** Out-of-range indices read as zero and ignore writes.
//! 3. **Debugging:** Formats the complete register state for end-of-run dumps.

use std::fmt;

use crate::common::constants::NUM_REGISTERS;
use crate::soc::traits::RegisterFile;

/// General-purpose registers plus program counter.
///
/// `R0` is an ordinary writable register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registers {
    gpr: [u8; NUM_REGISTERS],
    pc: u16,
}

impl Registers {
    /// Creates a register file with every register and the PC set to zero.
    pub const fn new() -> Self {
        Self {
            gpr: [0; NUM_REGISTERS],
            pc: 0,
        }
    }

    /// Returns a copy of all general-purpose registers.
    pub const fn snapshot(&self) -> [u8; NUM_REGISTERS] {
        self.gpr
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile for Registers {
    fn read_gpr(&self, idx: usize) -> u8 {
        self.gpr.get(idx).copied().unwrap_or(0)
    }

    fn write_gpr(&mut self, idx: usize, val: u8) {
        if let Some(slot) = self.gpr.get_mut(idx) {
            *slot = val;
        }
    }

    fn pc(&self) -> u16 {
        self.pc
    }

    fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }
}

impl fmt::Display for Registers {
    /// Four registers per row, signed and unsigned views side by side.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PC  = {}", self.pc)?;
        for (r, regs) in self.gpr.chunks(4).enumerate() {
            for (c, val) in regs.iter().enumerate() {
                let idx = r * 4 + c;
                write!(f, "R{idx:<2} = {:>4} ({val:#04x})  ", *val as i8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
