//! Simulation error definitions.
//!
//! Stage-local failures are raised as [`SimError`] and propagate through
//! `Cpu::tick`, which aborts the run instead of continuing with undefined
//! state. Unrecognized opcodes are not errors: they decode to a no-effect
//! control vector.

use super::data::AccessType;

/// Errors raised by the pipeline core.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// The ALU control unit produced no defined operation for the
    /// instruction at `pc`.
    #[error("invalid ALU operation for instruction {inst:#010x} at pc {pc:#x}")]
    InvalidAluOperation {
        /// Address of the offending instruction.
        pc: u64,
        /// Encoded instruction word.
        inst: u32,
    },

    /// A data memory access fell outside the configured memory.
    #[error("data memory {access} of {len} bytes at {addr} is out of range")]
    MemoryOutOfRange {
        /// Effective byte address computed by the ALU.
        addr: i64,
        /// Access width in bytes.
        len: usize,
        /// Direction of the access.
        access: AccessType,
    },

    /// A register index outside `0..32` was used.
    #[error("register index {0} is out of range")]
    RegisterOutOfRange(usize),

    /// The fetch stage addressed a word outside the instruction store.
    #[error("instruction fetch at pc {0:#x} is outside the program")]
    FetchOutOfRange(u64),

    /// A stage cursor named an instruction that has no live pipeline slot,
    /// or whose slot has not completed the preceding stage.
    #[error("instruction [{0}] is not ready for this stage")]
    SlotNotReady(usize),
}
