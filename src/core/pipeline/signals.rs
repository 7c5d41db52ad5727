//! Pipeline control signals and operation types.
//!
//! This module defines the control-signal vector produced by the control
//! unit from an instruction's opcode, the intermediate ALUOp value, and the
//! ALU operation selected by the ALU control unit.

use serde::Serialize;

/// Intermediate 2-bit ALU control value.
///
/// Narrows which branch of the ALU control table applies to an instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum AluOp {
    /// `00`: address calculation (loads, stores, unrecognized opcodes).
    #[default]
    Address = 0b00,
    /// `01`: branch comparison.
    Branch = 0b01,
    /// `10`: register-register operation selected by funct7/funct3.
    RType = 0b10,
    /// `11`: register-immediate operation selected by funct3.
    IType = 0b11,
}

/// Operation performed by the ALU.
///
/// Discriminants follow the classic 4-bit ALU control encoding. `Invalid` is
/// the sentinel for a (ALUOp, funct7, funct3) combination with no defined
/// mapping; the ALU rejects it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum AluControl {
    /// Bitwise AND.
    And = 0b0000,
    /// Bitwise OR.
    Or = 0b0001,
    /// 64-bit addition.
    #[default]
    Add = 0b0010,
    /// Shift left logical.
    ShiftLeft = 0b0100,
    /// Shift right logical.
    ShiftRight = 0b0101,
    /// 64-bit subtraction.
    Subtract = 0b0110,
    /// No defined operation.
    Invalid = 0b1111,
}

impl AluControl {
    /// Returns the 4-bit control code, or `None` for [`AluControl::Invalid`].
    pub fn code(self) -> Option<u8> {
        match self {
            AluControl::Invalid => None,
            op => Some(op as u8),
        }
    }
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum AluSrc {
    /// Use the rs2 register value.
    #[default]
    Reg2,
    /// Use the sign-extended immediate.
    Imm,
}

/// Control signals for pipeline stage execution.
///
/// Fully determined by the opcode. The default value is the all-zero,
/// no-effect vector assigned to unrecognized opcodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ControlSignals {
    /// Source selection for ALU operand B.
    pub alu_src: AluSrc,
    /// Write-back value comes from memory rather than the ALU.
    pub mem_to_reg: bool,
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Intermediate ALU control value.
    pub alu_op: AluOp,
}

impl ControlSignals {
    /// Returns `true` if the vector has no architectural effect.
    pub fn is_nop(&self) -> bool {
        !self.reg_write && !self.mem_write && !self.mem_read && !self.branch
    }

    /// Returns `true` if the instruction consumes its rs2 field as a register.
    pub fn reads_rs2(&self) -> bool {
        (self.alu_src == AluSrc::Reg2 && !self.is_nop()) || self.mem_write
    }
}
