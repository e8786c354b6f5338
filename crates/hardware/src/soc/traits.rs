//! Storage contracts consumed by the pipeline.
//!
//! The core only touches architectural state through these three traits. It defines:
//! 1. **`RegisterFile`:** 64 general-purpose 8-bit registers plus the program counter.
//! 2. **`DataMemory`:** Byte-addressable data store used by `LB`/`SB`.
//! 3. **`InstructionMemory`:** Word store holding the loaded program.
//!
//! The default implementations are [`Registers`](crate::core::arch::gpr::Registers),
//! [`DataRam`](crate::soc::memory::DataRam) and
//! [`InstructionBuffer`](crate::soc::memory::InstructionBuffer).

use crate::common::error::LoadError;

/// General-purpose registers and the program counter.
pub trait RegisterFile {
    /// Reads general-purpose register `idx` (0-63).
    fn read_gpr(&self, idx: usize) -> u8;
    /// Writes general-purpose register `idx` (0-63).
    fn write_gpr(&mut self, idx: usize, val: u8);
    /// Returns the program counter.
    fn pc(&self) -> u16;
    /// Overwrites the program counter.
    fn set_pc(&mut self, pc: u16);
    /// Advances the program counter by one instruction.
    fn increment_pc(&mut self) {
        self.set_pc(self.pc().wrapping_add(1));
    }
}

/// Byte-addressable data memory.
pub trait DataMemory {
    /// Reads the byte at `addr`.
    fn read(&self, addr: u16) -> u8;
    /// Writes `val` to `addr`.
    fn write(&mut self, addr: u16, val: u8);
}

/// Fixed-capacity instruction store.
pub trait InstructionMemory {
    /// Returns the word at `addr`, or `None` past the end of the loaded program.
    fn read(&self, addr: u16) -> Option<u16>;

    /// Replaces the whole contents with `program`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] if `program` does not fit; the
    /// previous contents are kept in that case.
    fn load_program(&mut self, program: &[u16]) -> Result<(), LoadError>;

    /// Capacity in words.
    fn capacity(&self) -> usize;
}
