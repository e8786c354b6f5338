//! Storage side of the machine.
//!
//! This module groups the components the core reads and writes but does not own the logic of:
//! 1. **Traits:** The narrow register/memory contracts consumed by the pipeline.
//! 2. **Memory:** Default data and instruction memory implementations.

/// Data RAM and instruction buffer.
pub mod memory;

/// Register file and memory contracts.
pub mod traits;

pub use memory::{DataRam, InstructionBuffer};
pub use traits::{DataMemory, InstructionMemory, RegisterFile};
