//! ALU arithmetic operations.
//!
//! Add, subtract and multiply on 8-bit operands. Results wrap at the
//! register width and are zero-extended to the 16-bit ALU output.

use crate::core::pipeline::signals::AluOp;

/// Executes an arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u8, b: u8) -> u16 {
    let r = match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a.wrapping_mul(b),
        _ => 0,
    };
    r as u16
}
