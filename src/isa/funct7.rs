//! RISC-V Base Integer (I) Function Codes (funct7).

/// Standard encoding (ADD, SRL, etc.).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate encoding (SUB, SRA).
pub const SUB: u32 = 0b0100000;

/// Alternate encoding for arithmetic right shift.
pub const SRA: u32 = 0b0100000;
