//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Instruction field layout and architectural sizes.
//! 2. **Error Handling:** Decode, load, assembly and top-level simulation errors.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for decoding, loading and assembling programs.
pub mod error;

pub use error::{AssembleError, AssembleErrorKind, DecodeError, LoadError, SimError};
