//! Simulator error definitions.
//!
//! This module defines every fatal condition the simulator can report. It provides:
//! 1. **Decode Errors:** Unrecognized opcodes found while decoding the fetch latch.
//! 2. **Load Errors:** Program images that cannot be placed in instruction memory.
//! 3. **Assembly Errors:** Source lines that cannot be translated to a machine word.
//! 4. **Aggregation:** A single `SimError` surfaced by the simulator entry points.
//!
//! None of these are recoverable: a run either completes or terminates on the first error.

use thiserror::Error;

/// Failure raised by the decode stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The 4-bit opcode field does not name an instruction.
    #[error("Invalid opcode: {opcode} (instruction #{address})")]
    InvalidOpcode {
        /// Numeric value of the opcode field.
        opcode: u8,
        /// Address the offending word was fetched from.
        address: u16,
    },
}

impl DecodeError {
    /// Returns the numeric opcode carried by the error.
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::InvalidOpcode { opcode, .. } => *opcode,
        }
    }
}

/// Failure raised while placing a program in instruction memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program has more words than instruction memory can hold.
    ///
    /// Instruction memory keeps its previous contents when this is returned.
    #[error("Program too long: {len} words exceeds instruction memory capacity of {capacity}")]
    ProgramTooLarge {
        /// Number of words in the rejected program.
        len: usize,
        /// Capacity of the instruction memory in words.
        capacity: usize,
    },

    /// The program source file could not be read.
    #[error("could not read program '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Reason an assembly line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleErrorKind {
    /// The first token is not a known mnemonic.
    #[error("unknown mnemonic '{0}'")]
    UnknownMnemonic(String),

    /// The instruction has the wrong number of operands.
    #[error("{mnemonic} expects {expected} operands, found {found}")]
    OperandCount {
        /// Mnemonic being assembled.
        mnemonic: &'static str,
        /// Required operand count.
        expected: usize,
        /// Operand count present on the line.
        found: usize,
    },

    /// A register operand is malformed or outside `R0`-`R63`.
    #[error("invalid register '{0}'")]
    InvalidRegister(String),

    /// An immediate operand is malformed or outside `0`-`63`.
    #[error("invalid immediate '{0}' (expected 0-63)")]
    InvalidImmediate(String),
}

/// An assembly line that could not be translated, with its location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}: `{text}`")]
pub struct AssembleError {
    /// One-based source line number.
    pub line: usize,
    /// Trimmed source text of the line.
    pub text: String,
    /// What was wrong with it.
    #[source]
    pub kind: AssembleErrorKind,
}

/// Top-level error for a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// Decoding hit an unrecognized opcode; the run was aborted.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The program could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The program source could not be assembled.
    #[error(transparent)]
    Assemble(#[from] AssembleError),

    /// The configuration could not be read or parsed.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}
