//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. It
//! handles addition, subtraction, bitwise AND/OR and logical shifts on
//! 64-bit signed operands, and recomputes the zero and negative flags on
//! every operation.

use crate::core::pipeline::signals::AluControl;

/// Bit mask for shift amount in RV64 (6 bits: 0-63).
const SHAMT_MASK_RV64: i64 = 0x3f;

/// Output of one ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluOutput {
    /// Computed value.
    pub result: i64,
    /// `result == 0`.
    pub zero: bool,
    /// `result < 0`.
    pub neg: bool,
}

impl AluOutput {
    fn new(result: i64) -> Self {
        Self {
            result,
            zero: result == 0,
            neg: result < 0,
        }
    }
}

/// Arithmetic Logic Unit (ALU) for integer operations.
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Arithmetic wraps on overflow. Shift amounts use the low six bits of
    /// `b`; shift-right is logical.
    ///
    /// # Arguments
    ///
    /// * `a` - First operand
    /// * `b` - Second operand (also the shift amount)
    /// * `op` - The ALU operation to perform
    ///
    /// # Returns
    ///
    /// The result and flags, or `None` for [`AluControl::Invalid`]. The
    /// Execute stage turns `None` into an invalid-operation error.
    pub fn execute(a: i64, b: i64, op: AluControl) -> Option<AluOutput> {
        let sh6 = (b & SHAMT_MASK_RV64) as u32;
        let result = match op {
            AluControl::And => a & b,
            AluControl::Or => a | b,
            AluControl::Add => a.wrapping_add(b),
            AluControl::Subtract => a.wrapping_sub(b),
            AluControl::ShiftLeft => a.wrapping_shl(sh6),
            AluControl::ShiftRight => ((a as u64) >> sh6) as i64,
            AluControl::Invalid => return None,
        };
        Some(AluOutput::new(result))
    }
}
