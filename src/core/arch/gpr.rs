//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file, containing
//! 32 signed 64-bit registers (x0-x31). Whether x0 is hardwired to zero is a
//! construction-time policy: the enforcing file ignores writes to x0, the
//! legacy file stores them like any other register.

use crate::common::SimError;
use crate::isa::abi::{NUM_REGS, REG_ZERO};

/// General-Purpose Register file.
#[derive(Clone, Debug)]
pub struct Gpr {
    regs: [i64; NUM_REGS],
    enforce_zero: bool,
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Gpr {
    /// Creates a register file with all registers initialized to zero.
    ///
    /// # Arguments
    ///
    /// * `enforce_zero` - Treat x0 as read-only zero.
    pub fn new(enforce_zero: bool) -> Self {
        Self {
            regs: [0; NUM_REGS],
            enforce_zero,
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31)
    ///
    /// # Returns
    ///
    /// The stored value, or `SimError::RegisterOutOfRange` for an index
    /// outside the file.
    pub fn read(&self, idx: usize) -> Result<i64, SimError> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(SimError::RegisterOutOfRange(idx))
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to x0 are silently dropped when the zero register is enforced.
    pub fn write(&mut self, idx: usize, val: i64) -> Result<(), SimError> {
        if idx == REG_ZERO && self.enforce_zero {
            return Ok(());
        }
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(SimError::RegisterOutOfRange(idx))?;
        *slot = val;
        Ok(())
    }

    /// Returns `true` if x0 is treated as read-only zero.
    pub fn enforces_zero(&self) -> bool {
        self.enforce_zero
    }

    /// Returns a snapshot of all 32 registers.
    pub fn snapshot(&self) -> [i64; NUM_REGS] {
        self.regs
    }
}
