//! Execute (EX) Stage.
//!
//! This module implements the final stage of the pipeline. It performs the following:
//! 1. **ALU Operations:** Applies the decoded operation to `R1` and the routed operand.
//! 2. **Memory Access:** Loads from or stores to data memory at the ALU result.
//! 3. **Writeback:** Writes the loaded byte or the truncated ALU result to `R1`.
//! 4. **Control Flow:** Redirects the program counter for `JR` and taken `BEQZ`.
//!
//! A redirect is reported to the caller, which discards both latches.

use crate::core::pipeline::latches::IdExEntry;
use crate::core::units::alu::Alu;
use crate::soc::traits::{DataMemory, RegisterFile};

/// Control-flow change requested by an executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    /// `JR`: program counter set to the concatenated register pair.
    Jump {
        /// New program counter.
        target: u16,
    },
    /// Taken `BEQZ`: program counter set to `pc + 1 + imm`.
    Branch {
        /// New program counter.
        target: u16,
    },
}

impl Redirect {
    /// The new program counter.
    pub const fn target(self) -> u16 {
        match self {
            Self::Jump { target } | Self::Branch { target } => target,
        }
    }
}

/// Result of executing one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecOutcome {
    /// ALU output (address for memory operations, jump target for `JR`).
    pub alu: u16,
    /// Set if the program counter was redirected and the pipeline must flush.
    pub redirect: Option<Redirect>,
}

/// Executes one ID/EX entry against the register file and data memory.
///
/// Register and memory side effects happen here. On a redirect the program
/// counter is already updated when this returns.
pub fn execute_stage<R, D>(entry: &IdExEntry, regs: &mut R, dmem: &mut D) -> ExecOutcome
where
    R: RegisterFile + ?Sized,
    D: DataMemory + ?Sized,
{
    let ctrl = entry.ctrl;
    let alu = Alu::execute(ctrl.alu, entry.rv1, entry.alu_src());

    let mut loaded = 0;
    if ctrl.mem_read {
        loaded = dmem.read(alu);
        tracing::debug!(addr = alu, value = loaded, "EX  load");
    }
    if ctrl.mem_write {
        dmem.write(alu, entry.rv1);
        tracing::debug!(addr = alu, value = entry.rv1, "EX  store");
    }

    if ctrl.reg_write {
        let value = if ctrl.mem_to_reg { loaded } else { alu as u8 };
        regs.write_gpr(entry.r1, value);
        tracing::debug!(reg = entry.r1, value, "EX  register write");
    }

    let redirect = if ctrl.jump {
        Some(Redirect::Jump { target: alu })
    } else if ctrl.branch && entry.rv1 == 0 {
        let target = entry
            .pc
            .wrapping_add(1)
            .wrapping_add(entry.imm as u16);
        Some(Redirect::Branch { target })
    } else {
        None
    };

    if let Some(r) = redirect {
        regs.set_pc(r.target());
        tracing::debug!(pc = entry.pc, new_pc = r.target(), "EX  redirect, flushing pipeline");
    }

    ExecOutcome { alu, redirect }
}
