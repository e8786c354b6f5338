//! Instruction Fetch (IF) Stage.
//!
//! Reads the word at the program counter. If one exists it becomes the next
//! IF/ID entry and the program counter advances by one; otherwise the next
//! IF/ID latch is empty and the program counter is left alone.

use crate::core::pipeline::latches::IfIdEntry;
use crate::isa::disasm::disassemble;
use crate::soc::traits::{InstructionMemory, RegisterFile};

/// Executes the instruction fetch stage.
///
/// Returns the entry for the next IF/ID latch, or `None` past the end of
/// the loaded program.
pub fn fetch_stage<R, I>(regs: &mut R, imem: &I) -> Option<IfIdEntry>
where
    R: RegisterFile + ?Sized,
    I: InstructionMemory + ?Sized,
{
    let pc = regs.pc();
    let inst = imem.read(pc)?;

    regs.increment_pc();
    tracing::debug!(
        pc,
        inst = format_args!("{inst:016b}"),
        asm = %disassemble(inst),
        next_pc = regs.pc(),
        "IF  fetched"
    );

    Some(IfIdEntry { pc, inst })
}
