//! Functional units of the core.
//!
//! The teaching CPU has a single functional unit: the integer ALU.

/// Arithmetic Logic Unit.
pub mod alu;
