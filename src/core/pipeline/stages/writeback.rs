//! Write Back (WB) Stage.
//!
//! Commits the memory-stage result to the destination register when
//! RegWrite is set, accounts the retired instruction and frees its slot.

use tracing::trace;

use crate::common::SimError;
use crate::core::Cpu;

/// Executes the Write-back stage for the instruction at program index `idx`.
pub fn wb_stage(cpu: &mut Cpu, idx: usize) -> Result<(), SimError> {
    let slot = cpu
        .slots
        .get_mut(idx)
        .and_then(Option::take)
        .ok_or(SimError::SlotNotReady(idx))?;
    let (Some(dec), Some(val)) = (slot.dec, slot.mem_res) else {
        return Err(SimError::SlotNotReady(idx));
    };

    let ctrl = dec.ctrl;
    cpu.stats.instructions_retired += 1;
    if ctrl.mem_read {
        cpu.stats.inst_load += 1;
    } else if ctrl.mem_write {
        cpu.stats.inst_store += 1;
    } else if ctrl.branch {
        cpu.stats.inst_branch += 1;
    } else if ctrl.reg_write {
        cpu.stats.inst_alu += 1;
    } else {
        cpu.stats.inst_nop += 1;
    }

    if ctrl.reg_write {
        cpu.regs.write(dec.rd, val)?;
        trace!("WB  [{}] x{} <= {}", idx + 1, dec.rd, val);
    } else {
        trace!("WB  [{}] no write", idx + 1);
    }
    Ok(())
}
