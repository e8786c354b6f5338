//! Two-latch pipelined 8-bit CPU simulator library.
//!
//! This crate models a small Harvard-architecture processor with the following:
//! 1. **ISA:** Twelve 16-bit instructions, an assembler and a disassembler.
//! 2. **Core:** Fetch, decode and execute stages joined by IF/ID and ID/EX latches.
//! 3. **Storage:** 64 8-bit registers, a 16-bit program counter, instruction and data memory.
//! 4. **Simulation:** Run loop, program loader, configuration and statistics.
//!
//! # Example
//!
//! ```
//! use pipesim_core::{Config, Simulator};
//!
//! let mut sim = Simulator::from_source(&Config::default(), "LDI R1 5").unwrap();
//! let summary = sim.run().unwrap();
//! assert_eq!(summary.cycles, 3);
//! assert_eq!(sim.cpu.regs.snapshot()[1], 5);
//! ```

/// Shared constants and error types.
pub mod common;
/// Simulator configuration.
pub mod config;
/// CPU core (engine, registers, pipeline, ALU).
pub mod core;
/// Instruction set (opcodes, field layout, assembler, disassembler).
pub mod isa;
/// Run loop and program loading.
pub mod sim;
/// Register and memory contracts with their default implementations.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memories, latches and stats.
pub use crate::core::Cpu;
/// Run-to-completion driver.
pub use crate::sim::Simulator;
