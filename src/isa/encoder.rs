//! Assembly Text Encoder.
//!
//! Translates one line of assembly (a mnemonic followed by comma or
//! parenthesis delimited operands) into a 32-bit instruction word using the
//! standard RISC-V field layout. Five instruction classes are produced:
//! R-type, I-type (including the RV64 `*w` immediates), Load, Store and
//! Branch.
//!
//! Encoding failures are reported as [`EncodeError`] and never touch
//! pipeline state.

use super::abi;
use super::instruction::{FUNCT3_SHIFT, FUNCT7_SHIFT, RD_SHIFT, RS1_SHIFT, RS2_SHIFT};
use super::{funct3, funct7, opcodes};

/// Smallest signed 12-bit immediate.
const IMM12_MIN: i64 = -2048;
/// Largest signed 12-bit immediate.
const IMM12_MAX: i64 = 2047;
/// Smallest signed 13-bit branch offset.
const BRANCH_MIN: i64 = -4096;
/// Largest signed 13-bit branch offset.
const BRANCH_MAX: i64 = 4094;
/// Immediate bit selecting an arithmetic right shift (funct7 = 0x20).
const SHIFT_ARITH_BIT: u32 = funct7::SRA << 5;

/// Errors produced while encoding a line of assembly.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The line holds no instruction.
    #[error("empty instruction")]
    Empty,

    /// The mnemonic is not part of the supported instruction set.
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),

    /// The number of operands does not match the instruction format.
    #[error("`{mnemonic}` expects {expected} operands, found {found}")]
    OperandCount {
        /// Mnemonic being encoded.
        mnemonic: String,
        /// Operands the format requires.
        expected: usize,
        /// Operands present on the line.
        found: usize,
    },

    /// A register operand could not be parsed.
    #[error("invalid register `{0}`")]
    BadRegister(String),

    /// An immediate operand could not be parsed.
    #[error("invalid immediate `{0}`")]
    BadImmediate(String),

    /// An immediate does not fit the instruction's field.
    #[error("immediate {value} out of range {min}..={max}")]
    ImmediateOutOfRange {
        /// Parsed immediate.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// A branch offset is not half-word aligned.
    #[error("branch offset {0} is not a multiple of 2")]
    MisalignedBranch(i64),

    /// A memory operand is not of the form `imm(reg)`.
    #[error("malformed memory operand `{0}`")]
    BadMemoryOperand(String),
}

/// Instruction format and the fixed fields selected by a mnemonic.
#[derive(Clone, Copy, Debug)]
enum Format {
    R { funct3: u32, funct7: u32 },
    I { opcode: u32, funct3: u32 },
    Shift { opcode: u32, funct3: u32, arith: bool, max_shamt: i64 },
    Load { funct3: u32 },
    Store { funct3: u32 },
    Branch { funct3: u32 },
}

impl Format {
    fn operand_count(self) -> usize {
        match self {
            Format::Load { .. } | Format::Store { .. } => 2,
            _ => 3,
        }
    }
}

fn lookup(mnemonic: &str) -> Option<Format> {
    use opcodes::{OP_IMM, OP_IMM_32};

    let format = match mnemonic {
        "add" => Format::R { funct3: funct3::ADD_SUB, funct7: funct7::DEFAULT },
        "sub" => Format::R { funct3: funct3::ADD_SUB, funct7: funct7::SUB },
        "sll" => Format::R { funct3: funct3::SLL, funct7: funct7::DEFAULT },
        "srl" => Format::R { funct3: funct3::SRL_SRA, funct7: funct7::DEFAULT },
        "xor" => Format::R { funct3: funct3::XOR, funct7: funct7::DEFAULT },
        "or" => Format::R { funct3: funct3::OR, funct7: funct7::DEFAULT },
        "and" => Format::R { funct3: funct3::AND, funct7: funct7::DEFAULT },

        "addi" => Format::I { opcode: OP_IMM, funct3: funct3::ADD_SUB },
        "slti" => Format::I { opcode: OP_IMM, funct3: funct3::SLT },
        "sltiu" => Format::I { opcode: OP_IMM, funct3: funct3::SLTU },
        "xori" => Format::I { opcode: OP_IMM, funct3: funct3::XOR },
        "ori" => Format::I { opcode: OP_IMM, funct3: funct3::OR },
        "andi" => Format::I { opcode: OP_IMM, funct3: funct3::AND },
        "slli" => Format::Shift { opcode: OP_IMM, funct3: funct3::SLL, arith: false, max_shamt: 63 },
        "srli" => Format::Shift { opcode: OP_IMM, funct3: funct3::SRL_SRA, arith: false, max_shamt: 63 },
        "srai" => Format::Shift { opcode: OP_IMM, funct3: funct3::SRL_SRA, arith: true, max_shamt: 63 },
        "addiw" => Format::I { opcode: OP_IMM_32, funct3: funct3::ADD_SUB },
        "slliw" => Format::Shift { opcode: OP_IMM_32, funct3: funct3::SLL, arith: false, max_shamt: 31 },
        "srliw" => Format::Shift { opcode: OP_IMM_32, funct3: funct3::SRL_SRA, arith: false, max_shamt: 31 },
        "sraiw" => Format::Shift { opcode: OP_IMM_32, funct3: funct3::SRL_SRA, arith: true, max_shamt: 31 },

        "lb" => Format::Load { funct3: funct3::LB },
        "lh" => Format::Load { funct3: funct3::LH },
        "lw" => Format::Load { funct3: funct3::LW },
        "ld" => Format::Load { funct3: funct3::LD },
        "lbu" => Format::Load { funct3: funct3::LBU },
        "lhu" => Format::Load { funct3: funct3::LHU },
        "lwu" => Format::Load { funct3: funct3::LWU },

        "sb" => Format::Store { funct3: funct3::SB },
        "sh" => Format::Store { funct3: funct3::SH },
        "sw" => Format::Store { funct3: funct3::SW },
        "sd" => Format::Store { funct3: funct3::SD },

        "beq" => Format::Branch { funct3: funct3::BEQ },
        "bne" => Format::Branch { funct3: funct3::BNE },
        "blt" => Format::Branch { funct3: funct3::BLT },
        "bge" => Format::Branch { funct3: funct3::BGE },
        "bltu" => Format::Branch { funct3: funct3::BLTU },
        "bgeu" => Format::Branch { funct3: funct3::BGEU },
        _ => return None,
    };
    Some(format)
}

/// Encodes a single line of assembly into an instruction word.
///
/// Anything after a `#` is treated as a comment.
///
/// # Examples
///
/// ```
/// use riscv_pipesim::isa::encoder::encode_line;
///
/// assert_eq!(encode_line("addi x1, x0, 5").unwrap(), 0x0050_0093);
/// ```
pub fn encode_line(line: &str) -> Result<u32, EncodeError> {
    let line = strip_comment(line).trim();
    if line.is_empty() {
        return Err(EncodeError::Empty);
    }

    let (mnemonic, rest) = match line.split_once(char::is_whitespace) {
        Some((m, r)) => (m, r),
        None => (line, ""),
    };
    let mnemonic = mnemonic.to_ascii_lowercase();
    let format = lookup(&mnemonic).ok_or_else(|| EncodeError::UnknownMnemonic(mnemonic.clone()))?;

    let operands: Vec<&str> = rest
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if operands.len() != format.operand_count() {
        return Err(EncodeError::OperandCount {
            mnemonic,
            expected: format.operand_count(),
            found: operands.len(),
        });
    }

    let word = match format {
        Format::R { funct3, funct7 } => {
            let rd = register(operands[0])?;
            let rs1 = register(operands[1])?;
            let rs2 = register(operands[2])?;
            r_type(opcodes::OP_REG, rd, funct3, rs1, rs2, funct7)
        }
        Format::I { opcode, funct3 } => {
            let rd = register(operands[0])?;
            let rs1 = register(operands[1])?;
            let imm = ranged(immediate(operands[2])?, IMM12_MIN, IMM12_MAX)?;
            i_type(opcode, rd, funct3, rs1, imm)
        }
        Format::Shift {
            opcode,
            funct3,
            arith,
            max_shamt,
        } => {
            let rd = register(operands[0])?;
            let rs1 = register(operands[1])?;
            let shamt = ranged(immediate(operands[2])?, 0, max_shamt)? as u32;
            let imm = if arith { SHIFT_ARITH_BIT | shamt } else { shamt };
            i_type(opcode, rd, funct3, rs1, imm as i64)
        }
        Format::Load { funct3 } => {
            let rd = register(operands[0])?;
            let (offset, rs1) = memory_operand(operands[1])?;
            i_type(opcodes::OP_LOAD, rd, funct3, rs1, offset)
        }
        Format::Store { funct3 } => {
            let rs2 = register(operands[0])?;
            let (offset, rs1) = memory_operand(operands[1])?;
            s_type(funct3, rs1, rs2, offset)
        }
        Format::Branch { funct3 } => {
            let rs1 = register(operands[0])?;
            let rs2 = register(operands[1])?;
            let offset = ranged(immediate(operands[2])?, BRANCH_MIN, BRANCH_MAX)?;
            if offset % 2 != 0 {
                return Err(EncodeError::MisalignedBranch(offset));
            }
            b_type(funct3, rs1, rs2, offset)
        }
    };
    Ok(word)
}

/// Removes a trailing `#` comment.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn register(token: &str) -> Result<u32, EncodeError> {
    abi::parse_register(token)
        .map(|idx| idx as u32)
        .ok_or_else(|| EncodeError::BadRegister(token.to_string()))
}

fn immediate(token: &str) -> Result<i64, EncodeError> {
    let bad = || EncodeError::BadImmediate(token.to_string());
    let (negative, body) = match token.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let magnitude = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16).map_err(|_| bad())?,
        None => body.parse::<i64>().map_err(|_| bad())?,
    };
    Ok(if negative { -magnitude } else { magnitude })
}

fn ranged(value: i64, min: i64, max: i64) -> Result<i64, EncodeError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(EncodeError::ImmediateOutOfRange { value, min, max })
    }
}

/// Parses `imm(reg)`, returning the offset and the base register.
fn memory_operand(token: &str) -> Result<(i64, u32), EncodeError> {
    let bad = || EncodeError::BadMemoryOperand(token.to_string());
    let (offset, rest) = token.split_once('(').ok_or_else(bad)?;
    let base = rest.strip_suffix(')').ok_or_else(bad)?;
    let offset = offset.trim();
    let offset = if offset.is_empty() { 0 } else { immediate(offset)? };
    let offset = ranged(offset, IMM12_MIN, IMM12_MAX)?;
    Ok((offset, register(base.trim())?))
}

fn r_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, rs2: u32, funct7: u32) -> u32 {
    (funct7 << FUNCT7_SHIFT)
        | (rs2 << RS2_SHIFT)
        | (rs1 << RS1_SHIFT)
        | (funct3 << FUNCT3_SHIFT)
        | (rd << RD_SHIFT)
        | opcode
}

fn i_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, imm: i64) -> u32 {
    let imm = (imm as u32) & 0xfff;
    (imm << RS2_SHIFT) | (rs1 << RS1_SHIFT) | (funct3 << FUNCT3_SHIFT) | (rd << RD_SHIFT) | opcode
}

fn s_type(funct3: u32, rs1: u32, rs2: u32, imm: i64) -> u32 {
    let imm = (imm as u32) & 0xfff;
    ((imm >> 5) << FUNCT7_SHIFT)
        | (rs2 << RS2_SHIFT)
        | (rs1 << RS1_SHIFT)
        | (funct3 << FUNCT3_SHIFT)
        | ((imm & 0x1f) << RD_SHIFT)
        | opcodes::OP_STORE
}

fn b_type(funct3: u32, rs1: u32, rs2: u32, offset: i64) -> u32 {
    let imm = offset as u32;
    (((imm >> 12) & 0x1) << 31)
        | (((imm >> 5) & 0x3f) << 25)
        | (rs2 << RS2_SHIFT)
        | (rs1 << RS1_SHIFT)
        | (funct3 << FUNCT3_SHIFT)
        | (((imm >> 1) & 0xf) << 8)
        | (((imm >> 11) & 0x1) << 7)
        | opcodes::OP_BRANCH
}
