//! Control Unit and ALU Control Unit.
//!
//! Pure decode logic: the control unit maps an opcode to its control-signal
//! vector, the ALU control unit narrows (ALUOp, funct7, funct3) to a single
//! ALU operation, and [`decode_fields`] slices an encoded word into its
//! fields and combines both units with immediate generation.

use crate::core::pipeline::signals::{AluControl, AluOp, AluSrc, ControlSignals};
use crate::core::pipeline::slot::DecodedFields;
use crate::isa::imm::imm_gen;
use crate::isa::instruction::InstructionBits;
use crate::isa::{funct3, funct7, opcodes};

/// funct7 for an I-type shift once shamt bit 5 is masked off.
const SHIFT_FUNCT6_MASK: u32 = 0x7e;

/// Derives the control-signal vector for an opcode.
///
/// Five opcode classes are recognized (R-type, Load, I-type immediate, Store
/// and Branch). Any other opcode yields the all-zero vector, which has no
/// register or memory effect.
pub fn control_unit(opcode: u32) -> ControlSignals {
    match opcode {
        opcodes::OP_REG => ControlSignals {
            alu_src: AluSrc::Reg2,
            reg_write: true,
            alu_op: AluOp::RType,
            ..Default::default()
        },
        opcodes::OP_LOAD => ControlSignals {
            alu_src: AluSrc::Imm,
            mem_to_reg: true,
            reg_write: true,
            mem_read: true,
            alu_op: AluOp::Address,
            ..Default::default()
        },
        opcodes::OP_IMM => ControlSignals {
            alu_src: AluSrc::Imm,
            reg_write: true,
            alu_op: AluOp::IType,
            ..Default::default()
        },
        opcodes::OP_STORE => ControlSignals {
            alu_src: AluSrc::Imm,
            mem_write: true,
            alu_op: AluOp::Address,
            ..Default::default()
        },
        opcodes::OP_BRANCH => ControlSignals {
            alu_src: AluSrc::Reg2,
            branch: true,
            alu_op: AluOp::Branch,
            ..Default::default()
        },
        _ => ControlSignals::default(),
    }
}

/// Selects the ALU operation from ALUOp, funct7 and funct3.
///
/// Combinations without a defined mapping (e.g. XOR, SRA, SLT) return
/// [`AluControl::Invalid`] rather than falling back to addition.
pub fn alu_control_unit(alu_op: AluOp, funct7: u32, funct3: u32) -> AluControl {
    match alu_op {
        AluOp::Address => AluControl::Add,
        AluOp::Branch => AluControl::Subtract,
        AluOp::RType => match (funct7, funct3) {
            (funct7::DEFAULT, funct3::ADD_SUB) => AluControl::Add,
            (funct7::SUB, funct3::ADD_SUB) => AluControl::Subtract,
            (funct7::DEFAULT, funct3::AND) => AluControl::And,
            (funct7::DEFAULT, funct3::OR) => AluControl::Or,
            (funct7::DEFAULT, funct3::SLL) => AluControl::ShiftLeft,
            (funct7::DEFAULT, funct3::SRL_SRA) => AluControl::ShiftRight,
            _ => AluControl::Invalid,
        },
        AluOp::IType => match funct3 {
            funct3::ADD_SUB => AluControl::Add,
            funct3::AND => AluControl::And,
            funct3::OR => AluControl::Or,
            funct3::SLL if funct7 & SHIFT_FUNCT6_MASK == funct7::DEFAULT => {
                AluControl::ShiftLeft
            }
            funct3::SRL_SRA if funct7 & SHIFT_FUNCT6_MASK == funct7::DEFAULT => {
                AluControl::ShiftRight
            }
            _ => AluControl::Invalid,
        },
    }
}

/// Decodes an encoded word into its fields.
///
/// Register read values are left at zero; the Decode stage fills them from
/// the register file.
pub fn decode_fields(inst: u32) -> DecodedFields {
    let opcode = inst.opcode();
    let ctrl = control_unit(opcode);
    let funct3 = inst.funct3();
    let funct7 = inst.funct7();
    DecodedFields {
        opcode,
        rd: inst.rd(),
        funct3,
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct7,
        ctrl,
        alu_ctrl: alu_control_unit(ctrl.alu_op, funct7, funct3),
        reg1_val: 0,
        reg2_val: 0,
        imm: imm_gen(inst),
    }
}
