//! Test module organization.
//!
//! This module organizes all integration tests for the pipeline simulator.


/// Register file and data memory tests.
mod arch_tests;

/// Configuration parsing tests.
mod config_tests;




/// Trace loader and report tests.
mod loader_tests;


/// End-to-end pipeline timing and result tests.
mod pipeline_tests;
