//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for detecting load-use hazards at
//! Decode and for resolving Read-After-Write dependencies at Execute by
//! forwarding results that have not yet been written back.
//!
//! Forwarding looks at two in-flight instructions: the one a single stage
//! ahead (its ALU result, or its memory result when it is a load) and the
//! one two stages ahead (its memory-stage result).

use serde::{Deserialize, Serialize};

use crate::core::pipeline::slot::{DecodedFields, PipeSlot};
use crate::isa::abi::REG_ZERO;

/// Precedence used when both forwarding sources match the same register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ForwardingPolicy {
    /// The nearer (newer) instruction wins.
    #[default]
    Nearest,
    /// The two-ahead instruction overrides the one-ahead instruction.
    Legacy,
}

/// Where an Execute-stage operand value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ForwardSource {
    /// Register file read, no forwarding.
    RegFile,
    /// Instruction one stage ahead (EX/MEM).
    ExMem,
    /// Instruction two stages ahead (MEM/WB).
    MemWb,
}

/// An operand value together with its source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operand {
    /// Resolved value.
    pub value: i64,
    /// Where the value came from.
    pub source: ForwardSource,
}

impl Operand {
    fn reg_file(value: i64) -> Self {
        Self {
            value,
            source: ForwardSource::RegFile,
        }
    }
}

/// Checks if a stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction immediately ahead of the
/// one being decoded is a load whose destination is one of the decoded
/// instruction's source registers. rs2 is only compared for instructions
/// that actually read it. A load into x0 never stalls when x0 is enforced.
///
/// # Arguments
///
/// * `ahead` - The instruction immediately ahead in program order
/// * `current` - Fields of the instruction being decoded
/// * `enforce_zero` - Whether x0 is read-only zero
///
/// # Returns
///
/// `true` if one bubble must be inserted before `current` executes.
pub fn need_stall_load_use(
    ahead: Option<&PipeSlot>,
    current: &DecodedFields,
    enforce_zero: bool,
) -> bool {
    let Some(ahead) = ahead else {
        return false;
    };
    let Some(load) = ahead.dec.filter(|d| d.ctrl.mem_read) else {
        return false;
    };
    if enforce_zero && load.rd == REG_ZERO {
        return false;
    }

    load.rd == current.rs1 || (current.ctrl.reads_rs2() && load.rd == current.rs2)
}

/// Value an instruction one stage ahead can forward, if it is available.
fn one_ahead_value(slot: &PipeSlot) -> Option<i64> {
    if slot.is_load() {
        slot.mem_res
    } else {
        slot.ex.map(|ex| ex.alu_result)
    }
}

/// Resolves one source register, forwarding from in-flight instructions.
///
/// # Arguments
///
/// * `reg` - Source register index
/// * `reg_val` - Value read from the register file
/// * `one_ahead` - Instruction one stage ahead, if still in flight
/// * `two_ahead` - Instruction two stages ahead, if still in flight
/// * `policy` - Precedence when both match
pub fn forward_operand(
    reg: usize,
    reg_val: i64,
    one_ahead: Option<&PipeSlot>,
    two_ahead: Option<&PipeSlot>,
    policy: ForwardingPolicy,
) -> Operand {
    if reg == REG_ZERO {
        return Operand::reg_file(reg_val);
    }

    let near = one_ahead
        .filter(|slot| slot.writes(reg))
        .and_then(one_ahead_value)
        .map(|value| Operand {
            value,
            source: ForwardSource::ExMem,
        });
    let far = two_ahead
        .filter(|slot| slot.writes(reg))
        .and_then(|slot| slot.mem_res)
        .map(|value| Operand {
            value,
            source: ForwardSource::MemWb,
        });

    let chosen = match policy {
        ForwardingPolicy::Nearest => near.or(far),
        ForwardingPolicy::Legacy => far.or(near),
    };
    chosen.unwrap_or(Operand::reg_file(reg_val))
}

/// Resolves both source operands of an instruction about to execute.
///
/// # Returns
///
/// A tuple `(rs1_operand, rs2_operand)`.
pub fn forward_rs(
    dec: &DecodedFields,
    one_ahead: Option<&PipeSlot>,
    two_ahead: Option<&PipeSlot>,
    policy: ForwardingPolicy,
) -> (Operand, Operand) {
    let a = forward_operand(dec.rs1, dec.reg1_val, one_ahead, two_ahead, policy);
    let b = forward_operand(dec.rs2, dec.reg2_val, one_ahead, two_ahead, policy);
    (a, b)
}
