//! RISC-V Five-Stage Pipeline Simulator Library.
//!
//! This crate implements a cycle-accurate model of a classic in-order
//! five-stage pipeline (Fetch, Decode, Execute, Memory, Write-back) running a
//! subset of RV64I. Programs are written as assembly traces, encoded into
//! 32-bit words, and simulated with load-use stall detection and operand
//! forwarding.
//!
//! # Modules
//!
//! * `common`: Error taxonomy and memory access kinds.
//! * `config`: Configuration loading and parsing.
//! * `core`: CPU core implementation.
//! * `isa`: Instruction Set Architecture definitions and the encoder.
//! * `sim`: Instruction store, trace loader and reports.
//! * `stats`: Performance statistics collection.

/// Shared types and error handling.
///
/// Provides the [`common::SimError`] taxonomy raised by the pipeline and the
/// access kinds used to describe memory faults.
pub mod common;

/// Configuration system for the pipeline, data memory and initial state.
///
/// Loads and parses TOML configuration files.
pub mod config;

/// CPU core implementation including pipeline stages and execution units.
///
/// Implements the 5-stage in-order pipeline (Fetch, Decode, Execute, Memory, Writeback),
/// the register file and data memory, hazard detection and forwarding.
pub mod core;

/// Instruction Set Architecture definitions, decoders and encoder.
pub mod isa;

/// Simulation harness: instruction store, trace loader and reports.
pub mod sim;

/// Performance statistics collection and reporting.
///
/// Tracks cycle counts, instruction counts, stalls and forwarding activity
/// during simulation execution.
pub mod stats;
