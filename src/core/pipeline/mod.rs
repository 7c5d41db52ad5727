//! Instruction pipeline implementation.
//!
//! This module contains the five-stage instruction pipeline (fetch, decode,
//! execute, memory, writeback), the per-instruction slots that carry state
//! between stages, the stage cursors driving per-cycle advancement, hazard
//! detection and forwarding logic, and control signals.

/// Per-stage cursors and bubble bookkeeping.
pub mod cursors;

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Control signals generated during instruction decode.
pub mod signals;

/// Per-instruction pipeline slots.
pub mod slot;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;
