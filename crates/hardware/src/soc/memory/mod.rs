//! Simulator memories.
//!
//! This module implements the two storage arrays of the Harvard-style machine. It provides:
//! 1. **Data:** Byte-addressable data RAM accessed by `LB`/`SB`.
//! 2. **Instruction:** Word store that holds the loaded program.
//!
//! Both are plain instance-owned values; each `Cpu` constructs its own.

/// Byte-addressable data RAM.
pub mod data;

/// Fixed-capacity instruction store.
pub mod instruction;

pub use data::DataRam;
pub use instruction::InstructionBuffer;
