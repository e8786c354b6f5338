//! Architectural state.

/// General-purpose register file and program counter.
pub mod gpr;
