//! Instruction Fetch (IF) Stage.
//!
//! Reads the word at the program counter from the instruction store,
//! allocates a pipeline slot for it and advances the program counter by one
//! instruction. Branches never redirect fetch.

use tracing::trace;

use crate::common::SimError;
use crate::core::pipeline::slot::PipeSlot;
use crate::core::Cpu;
use crate::sim::program::INST_SIZE;

/// Executes the Fetch stage for the instruction at program index `idx`.
pub fn fetch_stage(cpu: &mut Cpu, idx: usize) -> Result<(), SimError> {
    let pc = cpu.pc;
    let inst = cpu
        .program
        .fetch(pc)
        .ok_or(SimError::FetchOutOfRange(pc))?
        .word;

    trace!("IF  [{}] pc={:#x} inst={:#010x}", idx + 1, pc, inst);

    cpu.slots[idx] = Some(PipeSlot::fetched(pc, inst));
    cpu.pc = pc.wrapping_add(INST_SIZE);
    Ok(())
}
