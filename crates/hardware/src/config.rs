//! Configuration system for the pipeline simulator.
//!
//! This module defines the structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline machine sizes (instruction and data memory).
//! 2. **Structures:** Hierarchical config for general options and memory.
//! 3. **Loading:** Parsing from a JSON string or file, with every field optional.
//! 4. **Validation:** Memory sizes must fit the 16-bit address space.
//!
//! Use `Config::default()` when no configuration file is given.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::ADDRESS_SPACE;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::{DATA_MEMORY_BYTES, INSTRUCTION_MEMORY_WORDS};

    /// Latch contents are logged at TRACE unless asked for.
    pub const TRACE_PIPELINE: bool = false;

    /// Initial program counter.
    pub const START_PC: u16 = 0;

    /// Instruction memory capacity in words.
    pub const INSTRUCTION_WORDS: usize = INSTRUCTION_MEMORY_WORDS;

    /// Data memory size in bytes.
    pub const DATA_BYTES: usize = DATA_MEMORY_BYTES;
}

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was opened.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The JSON was malformed or had fields of the wrong type.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value parsed but is outside its allowed range.
    #[error("invalid config: {field} = {value} (must be 1..={max})")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Value that was given.
        value: usize,
        /// Largest accepted value.
        max: usize,
    },
}

/// Root configuration structure.
///
/// Every section and field is optional in JSON; missing values take their
/// defaults.
///
/// # Example
///
/// ```
/// use pipesim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_pipeline": true },
///     "memory": { "data_bytes": 256 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_pipeline);
/// assert_eq!(config.memory.data_bytes, 256);
/// assert_eq!(config.memory.instruction_words, 1024);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Instruction and data memory sizes
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid for this schema,
    /// or [`ConfigError::Invalid`] if a memory size is out of range.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or the
    /// errors of [`Config::from_json_str`] for its contents.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks that both memories are non-empty and addressable with 16 bits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("memory.instruction_words", self.memory.instruction_words),
            ("memory.data_bytes", self.memory.data_bytes),
        ];
        for (field, value) in sizes {
            if value == 0 || value > ADDRESS_SPACE {
                return Err(ConfigError::Invalid {
                    field,
                    value,
                    max: ADDRESS_SPACE,
                });
            }
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Log latch contents every cycle at INFO level (TRACE otherwise).
    #[serde(default = "GeneralConfig::default_trace_pipeline")]
    pub trace_pipeline: bool,
    /// Initial program counter.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u16,
}

impl GeneralConfig {
    const fn default_trace_pipeline() -> bool {
        defaults::TRACE_PIPELINE
    }

    const fn default_start_pc() -> u16 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_pipeline: Self::default_trace_pipeline(),
            start_pc: Self::default_start_pc(),
        }
    }
}

/// Memory sizes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Instruction memory capacity in 16-bit words (1 to 65536).
    #[serde(default = "MemoryConfig::default_instruction_words")]
    pub instruction_words: usize,
    /// Data memory size in bytes (1 to 65536). Addresses wrap modulo this size.
    #[serde(default = "MemoryConfig::default_data_bytes")]
    pub data_bytes: usize,
}

impl MemoryConfig {
    const fn default_instruction_words() -> usize {
        defaults::INSTRUCTION_WORDS
    }

    const fn default_data_bytes() -> usize {
        defaults::DATA_BYTES
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            instruction_words: Self::default_instruction_words(),
            data_bytes: Self::default_data_bytes(),
        }
    }
}
