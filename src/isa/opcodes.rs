//! RISC-V Base Integer (I) Opcodes.
//!
//! Defines the major opcodes (bits 6-0) understood by the encoder. Only the
//! first five are recognized by the control unit.

/// Load instructions (LB, LH, LW, LD, etc.).
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u32 = 0b0010011;

/// Store instructions (SB, SH, SW, SD).
pub const OP_STORE: u32 = 0b0100011;

/// Register-Register arithmetic (ADD, SUB, SLL, etc.).
pub const OP_REG: u32 = 0b0110011;

/// Conditional Branch instructions (BEQ, BNE, etc.).
pub const OP_BRANCH: u32 = 0b1100011;

/// 32-bit Immediate arithmetic (ADDIW, SLLIW, etc.) - RV64 only.
///
/// Encoded by the assembler but not recognized by the control unit, so it
/// retires as a no-op.
pub const OP_IMM_32: u32 = 0b0011011;
