//! Memory Access (MEM) Stage.
//!
//! Loads read a doubleword at the ALU address, stores write the forwarded
//! rs2 value there. Every other instruction passes its ALU result through.

use tracing::trace;

use crate::common::SimError;
use crate::core::units::lsu::Lsu;
use crate::core::Cpu;

/// Executes the Memory stage for the instruction at program index `idx`.
pub fn mem_stage(cpu: &mut Cpu, idx: usize) -> Result<(), SimError> {
    let slot = cpu.slot(idx)?;
    let (Some(dec), Some(ex)) = (slot.dec, slot.ex) else {
        return Err(SimError::SlotNotReady(idx));
    };

    let res = Lsu::access(&mut cpu.dmem, &dec.ctrl, ex.alu_result, ex.store_data)?;

    if dec.ctrl.mem_read {
        trace!("MEM [{}] load Mem[{}] -> {}", idx + 1, ex.alu_result, res);
    } else if dec.ctrl.mem_write {
        trace!(
            "MEM [{}] store {} -> Mem[{}]",
            idx + 1,
            ex.store_data,
            ex.alu_result
        );
    } else {
        trace!("MEM [{}] pass {}", idx + 1, res);
    }

    cpu.slot_mut(idx)?.mem_res = Some(res);
    Ok(())
}
