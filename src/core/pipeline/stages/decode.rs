//! Instruction Decode (ID) Stage.
//!
//! Slices the fetched word into its fields, derives control signals, ALU
//! control and the immediate, reads the register file, and checks the
//! instruction immediately ahead for a load-use hazard. A detected hazard
//! is recorded on the slot; the driver turns it into one Execute bubble.

use tracing::{debug, trace, warn};

use crate::common::SimError;
use crate::core::control::decode_fields;
use crate::core::pipeline::hazards;
use crate::core::Cpu;

/// Executes the Decode stage for the instruction at program index `idx`.
pub fn decode_stage(cpu: &mut Cpu, idx: usize) -> Result<(), SimError> {
    let slot = cpu.slot(idx)?;
    let mut dec = decode_fields(slot.inst);
    dec.reg1_val = cpu.regs.read(dec.rs1)?;
    dec.reg2_val = cpu.regs.read(dec.rs2)?;

    if dec.ctrl.is_nop() {
        warn!(
            "instruction [{}] has unrecognized opcode {:#04x}, treating as no-op",
            idx + 1,
            dec.opcode
        );
    }

    let ahead = idx.checked_sub(1).and_then(|i| cpu.slots[i].as_ref());
    let stall = hazards::need_stall_load_use(ahead, &dec, cpu.regs.enforces_zero());
    if stall {
        debug!(
            "instruction [{}] depends on the load ahead, inserting a bubble",
            idx + 1
        );
    }

    trace!(
        "ID  [{}] rd=x{} rs1=x{} rs2=x{} imm={} alu={:?}",
        idx + 1,
        dec.rd,
        dec.rs1,
        dec.rs2,
        dec.imm,
        dec.alu_ctrl
    );

    let slot = cpu.slot_mut(idx)?;
    slot.dec = Some(dec);
    slot.stall_pending = stall;
    Ok(())
}
