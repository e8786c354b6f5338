//! ALU circular shift operations.
//!
//! Rotates operand A left (SLC) or right (SRC). The rotation amount is
//! masked to 3 bits (0-7), the valid range for an 8-bit operand.

use crate::core::pipeline::signals::AluOp;

/// Bit mask for the rotation amount (3 bits: 0-7).
const SHAMT_MASK: u8 = 0x7;

/// Executes a rotate operation.
///
/// Returns `0` for non-rotate opcodes.
pub fn execute(op: AluOp, a: u8, b: u8) -> u16 {
    let sh = (b & SHAMT_MASK) as u32;
    let r = match op {
        AluOp::Slc => a.rotate_left(sh),
        AluOp::Src => a.rotate_right(sh),
        _ => 0,
    };
    r as u16
}
