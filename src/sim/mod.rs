//! Simulation harness: instruction store, trace loading and reporting.

/// Trace-file loading and assembly into a [`program::Program`].
pub mod loader;

/// Instruction store addressed by program counter.
pub mod program;

/// Human-readable and JSON run reports.
pub mod report;
