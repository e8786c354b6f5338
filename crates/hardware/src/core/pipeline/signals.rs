//! Pipeline control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **Operation Classification:** Names the nine ALU operations.
//! 2. **Operand Selection:** Chooses the ALU's second operand (register or immediate).
//! 3. **Control Table:** Maps every opcode to its complete control-signal set.

use crate::isa::opcodes::Opcode;

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// 8-bit wrapping addition.
    #[default]
    Add,

    /// 8-bit wrapping subtraction.
    Sub,

    /// 8-bit wrapping multiplication (low byte).
    Mul,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Rotate left (shift-left-circular).
    Slc,

    /// Rotate right (shift-right-circular).
    Src,

    /// Pass the routed second operand through unchanged.
    Transfer,

    /// Concatenate the operands into a 16-bit jump target (`A << 8 | B`).
    Concat,
}

/// Source for ALU operand B. Operand A is always the `R1` register value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Use the `R2` register value.
    #[default]
    Reg2,

    /// Use the 6-bit immediate.
    Imm,
}

/// Control signals for the execute stage.
///
/// Generated once per instruction by the decoder and carried in the
/// ID/EX latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// ALU operation to perform.
    pub alu: AluOp,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
    /// Read data memory at the ALU result (load).
    pub mem_read: bool,
    /// Write `R1` to data memory at the ALU result (store).
    pub mem_write: bool,
    /// Write the loaded byte, not the ALU result, to `R1`.
    pub mem_to_reg: bool,
    /// Enable write to `R1`.
    pub reg_write: bool,
    /// Instruction is a conditional branch (`BEQZ`).
    pub branch: bool,
    /// Instruction is an unconditional register jump (`JR`).
    pub jump: bool,
}

/// ALU operation used by the `AND` opcode.
///
/// Historically `AND` was routed to the adder; that mapping is kept unless the
/// `logical-and` feature is enabled.
#[cfg(not(feature = "logical-and"))]
pub const AND_ALU_OP: AluOp = AluOp::Add;

/// ALU operation used by the `AND` opcode.
#[cfg(feature = "logical-and")]
pub const AND_ALU_OP: AluOp = AluOp::And;

impl ControlSignals {
    /// Returns the control-signal set for `op`.
    ///
    /// | Opcode | ALU      | B    | MemRd | MemWr | MemToReg | RegWr | Branch | Jump |
    /// |--------|----------|------|-------|-------|----------|-------|--------|------|
    /// | ADD    | Add      | R2   |       |       |          | x     |        |      |
    /// | SUB    | Sub      | R2   |       |       |          | x     |        |      |
    /// | MUL    | Mul      | R2   |       |       |          | x     |        |      |
    /// | AND    | Add (*)  | R2   |       |       |          | x     |        |      |
    /// | OR     | Or       | R2   |       |       |          | x     |        |      |
    /// | SLC    | Slc      | IMM  |       |       |          | x     |        |      |
    /// | SRC    | Src      | IMM  |       |       |          | x     |        |      |
    /// | SB     | Transfer | IMM  |       | x     |          |       |        |      |
    /// | LB     | Transfer | IMM  | x     |       | x        | x     |        |      |
    /// | LDI    | Transfer | IMM  |       |       |          | x     |        |      |
    /// | BEQZ   | Transfer | IMM  |       |       |          |       | x      |      |
    /// | JR     | Concat   | R2   |       |       |          |       |        | x    |
    ///
    /// (*) see [`AND_ALU_OP`].
    pub const fn for_opcode(op: Opcode) -> Self {
        const ALU_REG: ControlSignals = ControlSignals {
            alu: AluOp::Add,
            b_src: OpBSrc::Reg2,
            mem_read: false,
            mem_write: false,
            mem_to_reg: false,
            reg_write: true,
            branch: false,
            jump: false,
        };
        const TRANSFER_IMM: ControlSignals = ControlSignals {
            alu: AluOp::Transfer,
            b_src: OpBSrc::Imm,
            mem_read: false,
            mem_write: false,
            mem_to_reg: false,
            reg_write: false,
            branch: false,
            jump: false,
        };

        match op {
            Opcode::Add => ALU_REG,
            Opcode::Sub => Self {
                alu: AluOp::Sub,
                ..ALU_REG
            },
            Opcode::Mul => Self {
                alu: AluOp::Mul,
                ..ALU_REG
            },
            Opcode::And => Self {
                alu: AND_ALU_OP,
                ..ALU_REG
            },
            Opcode::Or => Self {
                alu: AluOp::Or,
                ..ALU_REG
            },
            Opcode::Slc => Self {
                alu: AluOp::Slc,
                b_src: OpBSrc::Imm,
                ..ALU_REG
            },
            Opcode::Src => Self {
                alu: AluOp::Src,
                b_src: OpBSrc::Imm,
                ..ALU_REG
            },
            Opcode::Sb => Self {
                mem_write: true,
                ..TRANSFER_IMM
            },
            Opcode::Lb => Self {
                mem_read: true,
                mem_to_reg: true,
                reg_write: true,
                ..TRANSFER_IMM
            },
            Opcode::Ldi => Self {
                reg_write: true,
                ..TRANSFER_IMM
            },
            Opcode::Beqz => Self {
                branch: true,
                ..TRANSFER_IMM
            },
            Opcode::Jr => Self {
                alu: AluOp::Concat,
                reg_write: false,
                jump: true,
                ..ALU_REG
            },
        }
    }
}
