//! Two-latch instruction pipeline.
//!
//! Fetch → (IF/ID) → Decode → (ID/EX) → Execute. There is no hazard
//! detection or forwarding; control hazards are resolved by flushing both
//! latches when Execute redirects the program counter.

/// IF/ID and ID/EX latch entries.
pub mod latches;

/// Control signals and the opcode control table.
pub mod signals;

/// Fetch, decode and execute stage logic.
pub mod stages;
