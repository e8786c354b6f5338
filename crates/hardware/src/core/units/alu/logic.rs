//! ALU bitwise and routing operations.
//!
//! `Transfer` forwards the routed second operand (the immediate for
//! `LDI`/`LB`/`SB`/`BEQZ`), which is how those instructions obtain their
//! value or address. `Concat` joins two bytes into a 16-bit address for `JR`.

use crate::core::pipeline::signals::AluOp;

/// Executes a bitwise or routing operation.
///
/// Returns `0` for opcodes outside this group.
pub fn execute(op: AluOp, a: u8, b: u8) -> u16 {
    match op {
        AluOp::And => (a & b) as u16,
        AluOp::Or => (a | b) as u16,
        AluOp::Transfer => b as u16,
        AluOp::Concat => (a as u16) << 8 | b as u16,
        _ => 0,
    }
}
