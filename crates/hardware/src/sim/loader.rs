//! Program Loader.
//!
//! This module turns assembly source into an instruction image. It performs:
//! 1. **Line handling:** Skips blank and comment-only lines, numbering from 1.
//! 2. **Assembly:** Encodes each remaining line with [`assemble_line`].
//! 3. **File access:** Reads source files, reporting the path on failure.

use std::fs;
use std::path::Path;

use crate::common::error::{AssembleError, LoadError, SimError};
use crate::isa::asm::{assemble_line, strip_comment};

/// Assembles a whole program, one instruction per non-blank line.
///
/// # Errors
///
/// Returns the first [`AssembleError`]; its line number counts every line
/// of `source`, including blank ones.
///
/// # Example
///
/// ```
/// use pipesim_core::sim::loader::load_source;
///
/// let words = load_source("LDI R1 5   # load\n\nADD R1 R1\n").unwrap();
/// assert_eq!(words, vec![0x3045, 0x0041]);
/// ```
pub fn load_source(source: &str) -> Result<Vec<u16>, AssembleError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !strip_comment(line).is_empty())
        .map(|(i, line)| assemble_line(i + 1, line))
        .collect()
}

/// Reads and assembles a program file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or
/// [`SimError::Assemble`] for the first malformed line.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u16>, SimError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let words = load_source(&source)?;
    tracing::debug!(path = %path.display(), words = words.len(), "assembled program");
    Ok(words)
}
