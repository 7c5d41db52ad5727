//! Execution units used by the pipeline stages.

/// Arithmetic Logic Unit.
pub mod alu;

/// Load/Store Unit.
pub mod lsu;
