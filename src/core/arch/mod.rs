//! RISC-V architectural state.
//!
//! This module contains the architectural elements mutated by the pipeline:
//! the general-purpose register file and the data memory.

/// Byte-addressable data memory.
pub mod dmem;

/// General-Purpose Register file implementation.
pub mod gpr;
