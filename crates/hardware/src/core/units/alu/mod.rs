//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the stateless ALU used in the Execute stage.
//! Operand A is always the `R1` value; operand B is `R2` or the immediate
//! as selected by the decoder. Results are 16 bits wide so that `Concat`
//! can form a full jump target; everything else fits in the low byte.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul
//! - [`logic`]:      And, Or, Transfer, Concat
//! - [`shifts`]:     Slc, Src

/// Wrapping 8-bit arithmetic (add, subtract, multiply).
pub mod arithmetic;

/// Bitwise and routing operations (and, or, transfer, concat).
pub mod logic;

/// Circular shifts (slc, src).
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit for 8-bit operands.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipesim_core::core::units::alu::Alu;
    /// use pipesim_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 3, 4), 7);
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFF, 1), 0); // wraps at 8 bits
    /// assert_eq!(Alu::execute(AluOp::Slc, 0b1000_0001, 1), 0b0000_0011);
    /// assert_eq!(Alu::execute(AluOp::Concat, 0x01, 0x02), 0x0102);
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> u16 {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Transfer | AluOp::Concat => logic::execute(op, a, b),
            AluOp::Slc | AluOp::Src => shifts::execute(op, a, b),
        }
    }
}
