//! Simulator: drives a [`Cpu`] until the pipeline drains.
//!
//! A run always executes at least one cycle and stops at the end of the
//! first cycle after which both latches are empty and no instruction is
//! stored at the program counter. A decode error stops the run immediately.

use std::path::Path;

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::{Cpu, CycleReport};
use crate::sim::loader;
use crate::soc::traits::RegisterFile;
use crate::stats::SimStats;

/// Outcome of a completed run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Cycles executed.
    pub cycles: u64,
    /// Program counter after the last cycle.
    pub final_pc: u16,
    /// Counters collected during the run.
    pub stats: SimStats,
}

/// Top-level simulator: a CPU with the default storage.
#[derive(Debug)]
pub struct Simulator {
    /// Architectural and pipeline state.
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a simulator with an empty program.
    ///
    /// `config` is expected to have passed [`Config::validate`]; the
    /// `from_*` constructors check it themselves.
    pub fn new(config: &Config) -> Self {
        Self { cpu: Cpu::new(config) }
    }

    /// Creates a simulator and loads the given assembly source.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, or if the source
    /// does not assemble or does not fit.
    pub fn from_source(config: &Config, source: &str) -> Result<Self, SimError> {
        config.validate()?;
        let mut sim = Self::new(config);
        let words = loader::load_source(source)?;
        sim.cpu.load_program(&words)?;
        Ok(sim)
    }

    /// Creates a simulator and loads the given assembly file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, or if the file
    /// cannot be read, does not assemble, or does not fit.
    pub fn from_file(config: &Config, path: impl AsRef<Path>) -> Result<Self, SimError> {
        config.validate()?;
        let mut sim = Self::new(config);
        let words = loader::load_file(path)?;
        sim.cpu.load_program(&words)?;
        Ok(sim)
    }

    /// Advances by one cycle and reports what each stage did.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Decode`] on an invalid opcode.
    pub fn tick(&mut self) -> Result<CycleReport, SimError> {
        self.cpu.tick()
    }

    /// Runs until the pipeline drains.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Decode`] on an invalid opcode; the machine state
    /// is left as it was when the error occurred.
    pub fn run(&mut self) -> Result<RunSummary, SimError> {
        loop {
            let report = self.cpu.tick()?;
            if let Some(redirect) = report.redirect {
                tracing::info!(cycle = report.cycle, new_pc = redirect.target(), "pipeline flushed");
            }
            if self.cpu.is_drained() {
                break;
            }
        }
        let summary = RunSummary {
            cycles: self.cpu.stats.cycles,
            final_pc: self.cpu.regs.pc(),
            stats: self.cpu.stats.clone(),
        };
        tracing::info!(cycles = summary.cycles, pc = summary.final_pc, "run complete");
        Ok(summary)
    }
}
