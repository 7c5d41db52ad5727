//! Execute (EX) Stage.
//!
//! This module implements the execution stage of the pipeline. It is responsible for:
//! - Resolving operand values using forwarding logic (one and two instructions ahead).
//! - Selecting the second ALU operand through the ALUSrc mux.
//! - Running the ALU and recording its result and flags.
//! - Evaluating branch conditions. Fetch is never redirected, the outcome
//!   only feeds statistics and the trace.

use tracing::{debug, trace};

use crate::common::SimError;
use crate::core::pipeline::hazards::{self, ForwardSource, Operand};
use crate::core::pipeline::signals::AluSrc;
use crate::core::pipeline::slot::ExecResult;
use crate::core::units::alu::{Alu, AluOutput};
use crate::core::Cpu;
use crate::isa::funct3;
use crate::isa::imm::branch_byte_offset;

/// Executes the Execute stage for the instruction at program index `idx`.
///
/// # Logic Flow
/// 1. **Register read**: Source registers are read again so values retired
///    since Decode are picked up.
/// 2. **Forwarding**: Results of the two instructions ahead override the
///    register file (see [`hazards::forward_rs`]).
/// 3. **Execution**: The ALU runs on the resolved operands.
/// 4. **Branch**: The would-be-taken outcome is evaluated for branches.
///
/// # Errors
///
/// Returns [`SimError::InvalidAluOperation`] when the ALU control unit
/// selected no operation for this instruction.
pub fn execute_stage(cpu: &mut Cpu, idx: usize) -> Result<(), SimError> {
    let slot = cpu.slot(idx)?;
    let (pc, inst) = (slot.pc, slot.inst);
    let Some(mut dec) = slot.dec else {
        return Err(SimError::SlotNotReady(idx));
    };

    dec.reg1_val = cpu.regs.read(dec.rs1)?;
    dec.reg2_val = cpu.regs.read(dec.rs2)?;

    let one_ahead = idx.checked_sub(1).and_then(|i| cpu.slots[i].as_ref());
    let two_ahead = idx.checked_sub(2).and_then(|i| cpu.slots[i].as_ref());
    let (a, b) = hazards::forward_rs(&dec, one_ahead, two_ahead, cpu.forwarding);

    if !dec.ctrl.is_nop() {
        record_forward(cpu, idx, dec.rs1, a);
    }
    if dec.ctrl.reads_rs2() {
        record_forward(cpu, idx, dec.rs2, b);
    }

    let alu_2nd_val = match dec.ctrl.alu_src {
        AluSrc::Reg2 => b.value,
        AluSrc::Imm => dec.imm,
    };

    let AluOutput { result, zero, neg } = Alu::execute(a.value, alu_2nd_val, dec.alu_ctrl)
        .ok_or(SimError::InvalidAluOperation { pc, inst })?;

    if dec.ctrl.branch {
        let taken = branch_taken(dec.funct3, a.value, b.value, zero, neg);
        cpu.stats.branches += 1;
        if taken {
            cpu.stats.branches_taken += 1;
        }
        debug!(
            "instruction [{}] branch would {} to {:#x}",
            idx + 1,
            if taken { "be taken" } else { "fall through" },
            pc.wrapping_add(branch_byte_offset(dec.imm) as u64)
        );
    }

    trace!(
        "EX  [{}] a={} b={} alu={:?} result={}",
        idx + 1,
        a.value,
        alu_2nd_val,
        dec.alu_ctrl,
        result
    );

    let slot = cpu.slot_mut(idx)?;
    slot.dec = Some(dec);
    slot.ex = Some(ExecResult {
        alu_2nd_val,
        alu_result: result,
        zero,
        neg,
        store_data: b.value,
    });
    Ok(())
}

/// Counts and logs a forwarded operand.
fn record_forward(cpu: &mut Cpu, idx: usize, reg: usize, operand: Operand) {
    match operand.source {
        ForwardSource::RegFile => return,
        ForwardSource::ExMem => cpu.stats.forwards_ex_mem += 1,
        ForwardSource::MemWb => cpu.stats.forwards_mem_wb += 1,
    }
    debug!(
        "instruction [{}] x{} forwarded from {:?}: {}",
        idx + 1,
        reg,
        operand.source,
        operand.value
    );
}

/// Evaluates a branch condition from the ALU flags and the raw operands.
///
/// Unsigned comparisons use the operands directly since the subtract flags
/// only describe a signed result.
pub fn branch_taken(funct3: u32, a: i64, b: i64, zero: bool, neg: bool) -> bool {
    match funct3 {
        funct3::BEQ => zero,
        funct3::BNE => !zero,
        funct3::BLT => neg,
        funct3::BGE => !neg,
        funct3::BLTU => (a as u64) < (b as u64),
        funct3::BGEU => (a as u64) >= (b as u64),
        _ => false,
    }
}
