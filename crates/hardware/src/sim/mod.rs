//! Simulation driver and program loading.
//!
//! Provides the run loop around a [`Cpu`](crate::core::Cpu) and helpers
//! for turning assembly text into an instruction image.

/// Assembly source and file loading.
pub mod loader;

/// Run-to-completion driver.
pub mod simulator;

pub use simulator::{RunSummary, Simulator};
