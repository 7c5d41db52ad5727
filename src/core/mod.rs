//! Pipelined CPU core.
//!
//! Architectural state, execution units, decode logic, the five-stage
//! pipeline and the cycle driver that ties them together.

/// Register file and data memory.
pub mod arch;

/// Control unit, ALU control unit and field decode.
pub mod control;

/// Cycle driver owning all simulator state.
pub mod cpu;

/// Pipeline slots, cursors, hazards, signals and stages.
pub mod pipeline;

/// ALU and load/store unit.
pub mod units;

pub use cpu::Cpu;
