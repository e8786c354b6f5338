//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entries carried across the two cycle boundaries
//! of the pipeline: Fetch → Decode → Execute.
//!
//! 1. **Instruction Flow:** Each latch holds at most one instruction; an empty
//!    latch is `None` in the [`Cpu`](crate::core::Cpu).
//! 2. **Ownership:** Latches are replaced wholesale once per cycle and are
//!    never mutated in place by a stage.

use std::fmt;

use crate::core::pipeline::signals::{ControlSignals, OpBSrc};
use crate::isa::disasm::disassemble;
use crate::isa::opcodes::Opcode;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter value the instruction was fetched from.
    pub pc: u16,
    /// Raw 16-bit instruction encoding.
    pub inst: u16,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
///
/// Contains decoded instruction information, register indices and values,
/// the immediate, and the control signals for the execute stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u16,
    /// Raw instruction encoding.
    pub inst: u16,
    /// Decoded opcode.
    pub opcode: Opcode,
    /// First register index (`R1`, also the destination).
    pub r1: usize,
    /// Second register index (`R2`).
    pub r2: usize,
    /// Value read from `R1` during decode.
    pub rv1: u8,
    /// Value read from `R2` during decode.
    pub rv2: u8,
    /// 6-bit immediate (unsigned).
    pub imm: u8,
    /// Control signals for the execute stage.
    pub ctrl: ControlSignals,
}

impl IdExEntry {
    /// Second ALU operand as selected by `ctrl.b_src`.
    pub const fn alu_src(&self) -> u8 {
        match self.ctrl.b_src {
            OpBSrc::Reg2 => self.rv2,
            OpBSrc::Imm => self.imm,
        }
    }
}

impl fmt::Display for IfIdEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IF/ID {{ pc={}, inst={:016b} ({}) }}",
            self.pc,
            self.inst,
            disassemble(self.inst)
        )
    }
}

impl fmt::Display for IdExEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.ctrl;
        write!(
            f,
            "ID/EX {{ pc={}, op={}, r1=R{}, r2=R{}, rv1={}, rv2={}, imm={}, alu={:?}, alu_src={}, \
             mem_read={}, mem_write={}, mem_to_reg={}, reg_write={}, branch={}, jump={} }}",
            self.pc,
            self.opcode,
            self.r1,
            self.r2,
            self.rv1,
            self.rv2,
            self.imm,
            c.alu,
            self.alu_src(),
            c.mem_read,
            c.mem_write,
            c.mem_to_reg,
            c.reg_write,
            c.branch,
            c.jump
        )
    }
}
