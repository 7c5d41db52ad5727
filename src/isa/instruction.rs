//! Instruction field layout.
//!
//! Every supported format places opcode, rd, funct3, rs1, rs2 and funct7 at
//! the same bit positions; only the immediate is scattered differently (see
//! [`super::imm`]). The shift constants are shared with the encoder so both
//! directions agree on the layout.

/// Mask of the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7f;
/// Mask of a 5-bit register field.
pub const REG_MASK: u32 = 0x1f;
/// Mask of the funct3 field.
pub const FUNCT3_MASK: u32 = 0x7;
/// Mask of the funct7 field.
pub const FUNCT7_MASK: u32 = 0x7f;

/// Position of rd.
pub const RD_SHIFT: u32 = 7;
/// Position of funct3.
pub const FUNCT3_SHIFT: u32 = 12;
/// Position of rs1.
pub const RS1_SHIFT: u32 = 15;
/// Position of rs2.
pub const RS2_SHIFT: u32 = 20;
/// Position of funct7.
pub const FUNCT7_SHIFT: u32 = 25;

/// Field accessors for a 32-bit instruction word.
pub trait InstructionBits {
    /// Major opcode.
    fn opcode(&self) -> u32;

    /// Destination register index.
    fn rd(&self) -> usize;

    /// funct3 field.
    fn funct3(&self) -> u32;

    /// First source register index.
    fn rs1(&self) -> usize;

    /// Second source register index. For I-type words these bits belong to
    /// the immediate.
    fn rs2(&self) -> usize;

    /// funct7 field.
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}
