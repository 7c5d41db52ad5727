//! Pipeline slot structures.
//!
//! One [`PipeSlot`] exists per in-flight instruction. It is created at
//! Fetch, populated progressively by Decode, Execute and Memory-access, and
//! dropped by the driver once Write-back retires it.

use super::signals::{AluControl, ControlSignals};

/// Fields produced by the Decode stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodedFields {
    /// Major opcode (bits 0-6).
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// funct3 field.
    pub funct3: u32,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// funct7 field.
    pub funct7: u32,
    /// Control-signal vector derived from the opcode.
    pub ctrl: ControlSignals,
    /// ALU operation selected by the ALU control unit.
    pub alu_ctrl: AluControl,
    /// Value of rs1 read from the register file.
    pub reg1_val: i64,
    /// Value of rs2 read from the register file.
    pub reg2_val: i64,
    /// Sign-extended immediate.
    pub imm: i64,
}

/// Results produced by the Execute stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Second ALU operand after the ALUSrc mux.
    pub alu_2nd_val: i64,
    /// ALU output.
    pub alu_result: i64,
    /// ALU result was zero.
    pub zero: bool,
    /// ALU result was negative.
    pub neg: bool,
    /// rs2 value after forwarding, written to memory by stores.
    pub store_data: i64,
}

/// Lifecycle position of an in-flight instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SlotState {
    /// Word fetched from the instruction store.
    Fetched,
    /// Fields, control signals and immediate available.
    Decoded,
    /// ALU result available.
    Executed,
    /// Memory-stage result available.
    MemoryAccessed,
}

/// Per-instruction pipeline state.
#[derive(Clone, Debug, Default)]
pub struct PipeSlot {
    /// Address of the instruction.
    pub pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Decode-stage output.
    pub dec: Option<DecodedFields>,
    /// Execute-stage output.
    pub ex: Option<ExecResult>,
    /// Memory-stage output: loaded data or the ALU result (MemtoReg mux).
    pub mem_res: Option<i64>,
    /// A load-use hazard was detected at Decode and the Execute stage still
    /// owes this instruction one bubble.
    pub stall_pending: bool,
}

impl PipeSlot {
    /// Creates a freshly fetched slot.
    pub fn fetched(pc: u64, inst: u32) -> Self {
        Self {
            pc,
            inst,
            ..Default::default()
        }
    }

    /// Returns the furthest stage this slot has completed.
    pub fn state(&self) -> SlotState {
        if self.mem_res.is_some() {
            SlotState::MemoryAccessed
        } else if self.ex.is_some() {
            SlotState::Executed
        } else if self.dec.is_some() {
            SlotState::Decoded
        } else {
            SlotState::Fetched
        }
    }

    /// Returns `true` if this slot will write `reg` at Write-back.
    pub fn writes(&self, reg: usize) -> bool {
        self.dec
            .map(|d| d.ctrl.reg_write && d.rd == reg)
            .unwrap_or(false)
    }

    /// Returns `true` if this slot is a load.
    pub fn is_load(&self) -> bool {
        self.dec.map(|d| d.ctrl.mem_read).unwrap_or(false)
    }
}
