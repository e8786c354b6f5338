//! Pipeline stages.
//!
//! Each stage is a function over the architectural state it needs and the
//! latch entry it consumes. Stages never touch the latches themselves; the
//! [`Cpu`](crate::core::Cpu) commits their results once per cycle.

/// Instruction decode and control-signal generation.
pub mod decode;

/// ALU, memory access, writeback and redirects.
pub mod execute;

/// Instruction fetch from instruction memory.
pub mod fetch;

pub use decode::decode_stage;
pub use execute::{ExecOutcome, Redirect, execute_stage};
pub use fetch::fetch_stage;
