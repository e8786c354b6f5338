//! Instruction memory.
//!
//! Holds the loaded program as a vector of 16-bit words bounded by a fixed
//! capacity. Reads past the end of the loaded program return `None`, which
//! the fetch stage treats as "nothing to fetch".

use crate::common::constants::{ADDRESS_SPACE, INSTRUCTION_MEMORY_WORDS};
use crate::common::error::LoadError;
use crate::soc::traits::InstructionMemory;

/// Program store with a fixed word capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionBuffer {
    words: Vec<u16>,
    capacity: usize,
}

impl InstructionBuffer {
    /// Creates an empty buffer holding at most `capacity` words.
    ///
    /// Only the first 65536 words are addressable, so no more than that is
    /// reserved up front.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity.min(ADDRESS_SPACE)),
            capacity,
        }
    }

    /// Number of words currently loaded.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no program is loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The loaded program.
    pub fn words(&self) -> &[u16] {
        &self.words
    }
}

impl Default for InstructionBuffer {
    fn default() -> Self {
        Self::new(INSTRUCTION_MEMORY_WORDS)
    }
}

impl InstructionMemory for InstructionBuffer {
    fn read(&self, addr: u16) -> Option<u16> {
        self.words.get(addr as usize).copied()
    }

    fn load_program(&mut self, program: &[u16]) -> Result<(), LoadError> {
        if program.len() > self.capacity {
            tracing::warn!(
                len = program.len(),
                capacity = self.capacity,
                "program too long; instruction memory left unchanged"
            );
            return Err(LoadError::ProgramTooLarge {
                len: program.len(),
                capacity: self.capacity,
            });
        }
        self.words.clear();
        self.words.extend_from_slice(program);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
