//! Core processor implementation.
//!
//! This module contains the CPU engine, its register state, the two-latch
//! pipeline and the ALU.

/// Architectural register state.
pub mod arch;

/// CPU state and the per-cycle engine.
pub mod cpu;

/// Pipeline latches, control signals and stages.
pub mod pipeline;

/// Execution units.
pub mod units;

pub use self::cpu::{Cpu, CycleReport};
