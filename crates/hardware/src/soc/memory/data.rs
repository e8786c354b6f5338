//! Data memory.
//!
//! A flat byte array owned by one simulator instance. Addresses wrap modulo
//! the capacity, so every 16-bit ALU result is a valid address.

use std::fmt;

use crate::common::constants::DATA_MEMORY_BYTES;
use crate::soc::traits::DataMemory;

/// Byte-addressable data RAM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataRam {
    bytes: Vec<u8>,
}

impl DataRam {
    /// Creates a zero-filled RAM of `size` bytes.
    ///
    /// `size` must be non-zero; [`Config::validate`](crate::config::Config::validate)
    /// rejects a zero `memory.data_bytes` before it reaches here.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Capacity in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Iterates over `(address, value)` for every non-zero byte.
    pub fn non_zero(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.bytes
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, v)| v != 0)
    }

    #[inline]
    fn index(&self, addr: u16) -> usize {
        addr as usize % self.bytes.len()
    }
}

impl Default for DataRam {
    fn default() -> Self {
        Self::new(DATA_MEMORY_BYTES)
    }
}

impl DataMemory for DataRam {
    fn read(&self, addr: u16) -> u8 {
        self.bytes[self.index(addr)]
    }

    fn write(&mut self, addr: u16, val: u8) {
        let idx = self.index(addr);
        self.bytes[idx] = val;
    }
}

impl fmt::Display for DataRam {
    /// Lists only non-zero cells; an all-zero memory prints a single note.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut any = false;
        for (addr, val) in self.non_zero() {
            any = true;
            writeln!(f, "MEM[{addr:>4}] = {:>4} ({val:#04x})", val as i8)?;
        }
        if !any {
            writeln!(f, "(all {} bytes zero)", self.bytes.len())?;
        }
        Ok(())
    }
}
