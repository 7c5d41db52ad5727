//! Common utilities and types used throughout the pipeline simulator.
//!
//! This module provides the error taxonomy raised by the core and the
//! classification of data memory accesses.

/// Memory access type definitions.
pub mod data;

/// Error types raised by the pipeline core.
pub mod error;

pub use data::AccessType;
pub use error::SimError;
