//! Line assembler.
//!
//! Translates one line of assembly text into a 16-bit instruction word.
//! A line has the form `MNEMONIC Rn Rm` (register format) or
//! `MNEMONIC Rn imm` (immediate format). Operands may be separated by
//! whitespace or commas, mnemonics and the `R` prefix are case-insensitive,
//! and `#` starts a comment.

use crate::common::constants::{IMM_MAX, NUM_REGISTERS};
use crate::common::error::{AssembleError, AssembleErrorKind};
use crate::isa::instruction::{encode_imm, encode_reg};
use crate::isa::opcodes::{Format, Opcode};

/// Strips a trailing `#` comment and surrounding whitespace.
pub fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(code, _)| code).trim()
}

/// Assembles a single line.
///
/// `line_no` is only used to annotate errors. The caller is expected to skip
/// blank and comment-only lines.
///
/// # Errors
///
/// Returns an [`AssembleError`] naming the line if the mnemonic is unknown,
/// the operand count is wrong, or an operand is out of range.
pub fn assemble_line(line_no: usize, line: &str) -> Result<u16, AssembleError> {
    let code = strip_comment(line);
    let fail = |kind| AssembleError {
        line: line_no,
        text: code.to_string(),
        kind,
    };

    let mut tokens = code
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());
    let mnemonic = tokens.next().unwrap_or_default();
    let op = Opcode::from_mnemonic(mnemonic)
        .ok_or_else(|| fail(AssembleErrorKind::UnknownMnemonic(mnemonic.to_string())))?;

    let operands: Vec<&str> = tokens.collect();
    if operands.len() != 2 {
        return Err(fail(AssembleErrorKind::OperandCount {
            mnemonic: op.mnemonic(),
            expected: 2,
            found: operands.len(),
        }));
    }

    let r1 = parse_register(operands[0]).map_err(fail)?;
    match op.format() {
        Format::Register => {
            let r2 = parse_register(operands[1]).map_err(fail)?;
            Ok(encode_reg(op, r1, r2))
        }
        Format::Immediate => {
            let imm = parse_immediate(operands[1]).map_err(fail)?;
            Ok(encode_imm(op, r1, imm))
        }
    }
}

fn parse_register(token: &str) -> Result<usize, AssembleErrorKind> {
    let bad = || AssembleErrorKind::InvalidRegister(token.to_string());
    let digits = token
        .strip_prefix('R')
        .or_else(|| token.strip_prefix('r'))
        .ok_or_else(bad)?;
    match digits.parse::<usize>() {
        Ok(idx) if idx < NUM_REGISTERS => Ok(idx),
        _ => Err(bad()),
    }
}

fn parse_immediate(token: &str) -> Result<u8, AssembleErrorKind> {
    match token.parse::<u8>() {
        Ok(imm) if imm <= IMM_MAX => Ok(imm),
        _ => Err(AssembleErrorKind::InvalidImmediate(token.to_string())),
    }
}
