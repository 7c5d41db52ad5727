//! Load/Store Unit (LSU).
//!
//! Performs the data memory side of the Memory-access stage. All loads are
//! doubleword accesses regardless of funct3; stores write the doubleword
//! held in rs2.

use crate::common::SimError;
use crate::core::arch::dmem::DataMemory;
use crate::core::pipeline::signals::ControlSignals;

/// Load/Store Unit for data memory accesses.
pub struct Lsu;

impl Lsu {
    /// Performs the memory access for one instruction.
    ///
    /// # Arguments
    ///
    /// * `dmem` - Data memory
    /// * `ctrl` - Control signals of the instruction
    /// * `addr` - Effective address (the ALU result)
    /// * `store_data` - Value of rs2 after forwarding
    ///
    /// # Returns
    ///
    /// The memory-stage result selected by MemtoReg: the loaded value for
    /// loads, the ALU result otherwise.
    pub fn access(
        dmem: &mut DataMemory,
        ctrl: &ControlSignals,
        addr: i64,
        store_data: i64,
    ) -> Result<i64, SimError> {
        let loaded = if ctrl.mem_read {
            Some(dmem.load_doubleword(addr)?)
        } else {
            None
        };

        if ctrl.mem_write {
            dmem.store_doubleword(addr, store_data)?;
        }

        Ok(match (ctrl.mem_to_reg, loaded) {
            (true, Some(data)) => data,
            _ => addr,
        })
    }
}
