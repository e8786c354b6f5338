//! CPU Core Definition and Cycle Engine.
//!
//! This module defines the central `Cpu` structure, which owns the whole
//! machine state and advances it one clock cycle at a time. It coordinates:
//! 1. **State Management:** Registers, program counter, data and instruction memory.
//! 2. **Pipeline Control:** The IF/ID and ID/EX latches and their per-cycle commit.
//! 3. **Flushing:** Discarding in-flight instructions after a jump or taken branch.
//! 4. **Statistics:** Per-run counters in [`SimStats`].
//!
//! # Cycle ordering
//!
//! Both latches are taken out of the `Cpu` at the start of a cycle, so every
//! stage sees the pre-cycle values. Fetch runs first (current PC), then
//! Execute on the old ID/EX entry, then Decode on the old IF/ID entry.
//! Because Execute writes registers before Decode reads them, an instruction
//! decoded in the same cycle sees its predecessor's result. The new latch
//! values are committed together at the end of the cycle, or both cleared if
//! Execute redirected the program counter.

use crate::common::error::{LoadError, SimError};
use crate::config::Config;
use crate::core::arch::gpr::Registers;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::core::pipeline::stages::{Redirect, decode_stage, execute_stage, fetch_stage};
use crate::isa::opcodes::Opcode;
use crate::soc::memory::{DataRam, InstructionBuffer};
use crate::soc::traits::{DataMemory, InstructionMemory, RegisterFile};
use crate::stats::SimStats;

/// What happened during one clock cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// One-based cycle number.
    pub cycle: u64,
    /// Address fetched this cycle.
    pub fetched: Option<u16>,
    /// Address decoded this cycle (and committed to ID/EX).
    pub decoded: Option<u16>,
    /// Address executed this cycle.
    pub executed: Option<u16>,
    /// Redirect raised by Execute; both latches were flushed.
    pub redirect: Option<Redirect>,
}

/// Main CPU structure containing all processor state.
///
/// Generic over its storage so tests can substitute instrumented memories;
/// the defaults are the plain array-backed implementations.
#[derive(Debug)]
pub struct Cpu<R = Registers, D = DataRam, I = InstructionBuffer> {
    /// General-purpose registers and program counter.
    pub regs: R,
    /// Data memory.
    pub dmem: D,
    /// Instruction memory.
    pub imem: I,
    /// IF/ID latch (`None` when empty).
    pub if_id: Option<IfIdEntry>,
    /// ID/EX latch (`None` when empty).
    pub id_ex: Option<IdExEntry>,
    /// Performance statistics.
    pub stats: SimStats,
    /// Log latch contents at INFO instead of TRACE.
    pub trace_pipeline: bool,
}

impl Cpu {
    /// Creates a CPU with default storage sized by `config`.
    pub fn new(config: &Config) -> Self {
        let mut regs = Registers::new();
        regs.set_pc(config.general.start_pc);
        let mut cpu = Self::with_parts(
            regs,
            DataRam::new(config.memory.data_bytes),
            InstructionBuffer::new(config.memory.instruction_words),
        );
        cpu.trace_pipeline = config.general.trace_pipeline;
        cpu
    }
}

impl<R, D, I> Cpu<R, D, I>
where
    R: RegisterFile,
    D: DataMemory,
    I: InstructionMemory,
{
    /// Assembles a CPU from explicit storage components with empty latches.
    pub fn with_parts(regs: R, dmem: D, imem: I) -> Self {
        Self {
            regs,
            dmem,
            imem,
            if_id: None,
            id_ex: None,
            stats: SimStats::default(),
            trace_pipeline: false,
        }
    }

    /// Loads a program into instruction memory and empties both latches.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] if the program exceeds
    /// instruction memory; nothing is changed in that case.
    pub fn load_program(&mut self, program: &[u16]) -> Result<(), LoadError> {
        self.imem.load_program(program)?;
        self.if_id = None;
        self.id_ex = None;
        tracing::info!(words = program.len(), "program loaded");
        Ok(())
    }

    /// Returns `true` when nothing is in flight and there is nothing left to fetch.
    pub fn is_drained(&self) -> bool {
        self.if_id.is_none() && self.id_ex.is_none() && self.imem.read(self.regs.pc()).is_none()
    }

    /// Advances the machine by one clock cycle.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Decode`] if the instruction in IF/ID has an
    /// unassigned opcode. The run cannot continue after this.
    pub fn tick(&mut self) -> Result<CycleReport, SimError> {
        self.stats.cycles += 1;
        let cycle = self.stats.cycles;
        let _span = tracing::debug_span!("cycle", cycle).entered();

        let at_fetch = self
            .imem
            .read(self.regs.pc())
            .map(|_| self.regs.pc());
        tracing::debug!(
            fetch = ?at_fetch,
            decode = ?self.if_id.map(|e| e.pc),
            execute = ?self.id_ex.map(|e| e.pc),
            "instructions at stages"
        );
        self.log_latches("start of cycle");

        let if_id = self.if_id.take();
        let id_ex = self.id_ex.take();

        let next_if_id = fetch_stage(&mut self.regs, &self.imem);

        let redirect = id_ex.as_ref().and_then(|entry| {
            execute_stage(entry, &mut self.regs, &mut self.dmem).redirect
        });

        let next_id_ex = match (if_id.as_ref(), redirect) {
            (Some(entry), None) => Some(decode_stage(entry, &self.regs)?),
            _ => None,
        };

        self.record(id_ex.as_ref(), next_if_id.is_some(), next_id_ex.is_some(), redirect);

        if let Some(r) = redirect {
            let squashed = u64::from(if_id.is_some()) + u64::from(next_if_id.is_some());
            self.stats.flushes += 1;
            self.stats.squashed += squashed;
            tracing::debug!(new_pc = r.target(), squashed, "pipeline flushed");
        } else {
            self.if_id = next_if_id;
            self.id_ex = next_id_ex;
        }

        self.log_latches("end of cycle");

        Ok(CycleReport {
            cycle,
            fetched: next_if_id.map(|e| e.pc),
            decoded: next_id_ex.map(|e| e.pc),
            executed: id_ex.map(|e| e.pc),
            redirect,
        })
    }

    fn record(
        &mut self,
        executed: Option<&IdExEntry>,
        fetched: bool,
        decoded: bool,
        redirect: Option<Redirect>,
    ) {
        let s = &mut self.stats;
        s.instructions_fetched += u64::from(fetched);
        s.instructions_decoded += u64::from(decoded);

        let Some(entry) = executed else {
            return;
        };
        s.instructions_retired += 1;
        match entry.opcode {
            Opcode::Lb => s.inst_load += 1,
            Opcode::Sb => s.inst_store += 1,
            Opcode::Jr => s.inst_jump += 1,
            Opcode::Beqz => {
                s.inst_branch += 1;
                if matches!(redirect, Some(Redirect::Branch { .. })) {
                    s.branches_taken += 1;
                }
            }
            _ => s.inst_alu += 1,
        }
    }

    fn log_latches(&self, when: &str) {
        let if_id = self
            .if_id
            .map_or_else(|| "IF/ID empty".to_string(), |e| e.to_string());
        let id_ex = self
            .id_ex
            .map_or_else(|| "ID/EX empty".to_string(), |e| e.to_string());
        if self.trace_pipeline {
            tracing::info!(%if_id, %id_ex, "{when}");
        } else {
            tracing::trace!(%if_id, %id_ex, "{when}");
        }
    }
}
