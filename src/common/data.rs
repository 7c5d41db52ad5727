//! Memory Access Types.
//!
//! This module defines the classification of data memory accesses. The
//! Memory-access stage tags every access so that out-of-range faults can
//! report which direction failed.

use serde::Serialize;
use std::fmt;

/// Type of data memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AccessType {
    /// Data read access.
    ///
    /// Used when a Load moves a value from memory into the pipeline.
    Read,

    /// Data write access.
    ///
    /// Used when a Store moves a register value into memory.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessType::Read => write!(f, "read"),
            AccessType::Write => write!(f, "write"),
        }
    }
}
