//! Immediate Generation.
//!
//! Reassembles the displaced immediate bitfields of each instruction class
//! into a 12-bit value and sign-extends it to 64 bits.
//!
//! Branch immediates are produced in half-word units (`imm[12:1]`); use
//! [`branch_byte_offset`] to obtain the byte displacement.

use super::instruction::InstructionBits;
use super::opcodes;

/// Width of every generated immediate before sign extension.
const IMM_BITS: u32 = 12;

/// Sign bit of a 12-bit immediate.
const IMM_SIGN_BIT: i64 = 1 << (IMM_BITS - 1);

/// Mask selecting the low 12 bits.
const IMM_MASK: u32 = (1 << IMM_BITS) - 1;

/// Sign-extends a 12-bit pattern to 64 bits.
///
/// Bits above bit 11 of `raw` are ignored.
pub fn sign_extend_12(raw: u32) -> i64 {
    let value = (raw & IMM_MASK) as i64;
    if value & IMM_SIGN_BIT != 0 {
        value - (1 << IMM_BITS)
    } else {
        value
    }
}

/// Generates the sign-extended immediate for an encoded instruction.
///
/// * I-type and Load: bits 20-31.
/// * Store: `{bits 25-31, bits 7-11}`.
/// * Branch: `{bit 31, bit 7, bits 25-30, bits 8-11}`, i.e. the byte
///   offset divided by two.
/// * R-type and unrecognized opcodes: zero.
pub fn imm_gen(inst: u32) -> i64 {
    let raw = match inst.opcode() {
        opcodes::OP_LOAD | opcodes::OP_IMM => (inst >> 20) & IMM_MASK,
        opcodes::OP_STORE => {
            let imm_4_0 = (inst >> 7) & 0x1f;
            let imm_11_5 = (inst >> 25) & 0x7f;
            (imm_11_5 << 5) | imm_4_0
        }
        opcodes::OP_BRANCH => {
            let imm_12 = (inst >> 31) & 0x1;
            let imm_11 = (inst >> 7) & 0x1;
            let imm_10_5 = (inst >> 25) & 0x3f;
            let imm_4_1 = (inst >> 8) & 0xf;
            (imm_12 << 11) | (imm_11 << 10) | (imm_10_5 << 4) | imm_4_1
        }
        _ => return 0,
    };
    sign_extend_12(raw)
}

/// Converts a branch immediate (half-word units) into a byte offset.
pub fn branch_byte_offset(imm: i64) -> i64 {
    imm << 1
}
