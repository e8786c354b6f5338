//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Field Extraction:** Splits the 16-bit word into opcode, `R1`, `R2` and immediate.
//! 2. **Register Read:** Reads both `R1` and `R2`, whether or not the opcode uses them.
//! 3. **Control Generation:** Looks up the control-signal set for the opcode.
//!
//! An opcode outside the table aborts the run with a [`DecodeError`].

use crate::common::error::DecodeError;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::Opcode;
use crate::soc::traits::RegisterFile;

/// Executes the instruction decode stage on one IF/ID entry.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidOpcode`] if the opcode field is unassigned.
pub fn decode_stage<R>(entry: &IfIdEntry, regs: &R) -> Result<IdExEntry, DecodeError>
where
    R: RegisterFile + ?Sized,
{
    let inst = entry.inst;
    let raw_opcode = inst.opcode();
    let opcode = Opcode::from_bits(raw_opcode).ok_or(DecodeError::InvalidOpcode {
        opcode: raw_opcode,
        address: entry.pc,
    })?;

    let r1 = inst.r1();
    let r2 = inst.r2();
    let decoded = IdExEntry {
        pc: entry.pc,
        inst,
        opcode,
        r1,
        r2,
        rv1: regs.read_gpr(r1),
        rv2: regs.read_gpr(r2),
        imm: inst.imm(),
        ctrl: ControlSignals::for_opcode(opcode),
    };

    tracing::debug!(
        pc = decoded.pc,
        op = %opcode,
        r1,
        r2,
        rv1 = decoded.rv1,
        rv2 = decoded.rv2,
        imm = decoded.imm,
        "ID  decoded"
    );

    Ok(decoded)
}
