//! Run reports.
//!
//! The text report mirrors a classic trace-driven simulator dump: the
//! program listing in binary, then the non-zero registers and memory bytes
//! before and after the run. [`RunReport`] carries the same data for JSON
//! output.

use std::io::{self, Write};

use serde::Serialize;

use crate::core::Cpu;
use crate::sim::program::Program;
use crate::stats::SimStats;

/// Separator line between report sections.
pub const RULE: &str = "*----------------------------------------------*";

/// Writes each instruction address followed by its word in binary.
pub fn write_program<W: Write>(out: &mut W, program: &Program) -> io::Result<()> {
    for inst in program {
        writeln!(out, "Instruction at PC: {}", inst.address)?;
        writeln!(out, "{:032b}", inst.word)?;
    }
    Ok(())
}

/// Writes non-zero registers and non-zero memory bytes.
///
/// # Arguments
///
/// * `out` - Destination
/// * `label` - Prefix for the section headers (e.g. "Original", "Final")
/// * `cpu` - State to dump
pub fn write_state<W: Write>(out: &mut W, label: &str, cpu: &Cpu) -> io::Result<()> {
    writeln!(out, "{} register values (only values != 0):", label)?;
    for (i, val) in cpu.regs.snapshot().iter().enumerate() {
        if *val != 0 {
            writeln!(out, "x[{}]: {}", i, val)?;
        }
    }
    writeln!(out)?;
    writeln!(out, "{} memory bytes (only values != 0):", label)?;
    for (i, byte) in cpu.dmem.nonzero_bytes() {
        writeln!(out, "Mem[{}]: {:08b}", i, byte)?;
    }
    Ok(())
}

/// A non-zero data memory byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryByte {
    pub offset: usize,
    pub value: u8,
}

/// Machine-readable summary of a finished run.
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub cycles: u64,
    pub completed: bool,
    pub registers: Vec<i64>,
    pub memory: Vec<MemoryByte>,
    pub stats: SimStats,
}

impl RunReport {
    /// Captures the current state of `cpu`.
    pub fn from_cpu(cpu: &Cpu) -> Self {
        Self {
            cycles: cpu.cycles(),
            completed: cpu.completed(),
            registers: cpu.regs.snapshot().to_vec(),
            memory: cpu
                .dmem
                .nonzero_bytes()
                .map(|(offset, value)| MemoryByte { offset, value })
                .collect(),
            stats: cpu.stats.clone(),
        }
    }
}
