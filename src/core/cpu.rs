//! CPU core driver.
//!
//! [`Cpu`] owns the register file, data memory, instruction store and the
//! in-flight pipeline slots, and advances the whole pipeline one cycle per
//! [`Cpu::tick`]. Within a cycle the stages run in program order
//! (Fetch, Decode, Execute, Memory, Write-back), each on the instruction its
//! cursor names.

use tracing::debug;

use crate::common::SimError;
use crate::config::{Config, ConfigError};
use crate::core::arch::dmem::DataMemory;
use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::cursors::{Bubbles, StageCursors};
use crate::core::pipeline::hazards::ForwardingPolicy;
use crate::core::pipeline::slot::PipeSlot;
use crate::core::pipeline::stages;
use crate::isa::abi;
use crate::sim::program::Program;
use crate::stats::SimStats;

/// Pipelined processor state.
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Data memory.
    pub dmem: DataMemory,
    /// Address of the next instruction to fetch.
    pub pc: u64,
    /// Instruction store.
    pub program: Program,
    /// One slot per program instruction, `Some` while in flight.
    pub slots: Vec<Option<PipeSlot>>,
    /// Per-stage cursors.
    pub cursors: StageCursors,
    /// Bubbles owed by Memory and Write-back in the coming cycle.
    pub pending: Bubbles,
    /// Forwarding precedence.
    pub forwarding: ForwardingPolicy,
    /// Run statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Builds a CPU for `program`, seeding registers and memory from the
    /// `[init]` section of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a seeded register name is unknown or a
    /// seeded memory word falls outside data memory.
    pub fn new(program: Program, config: &Config) -> Result<Self, ConfigError> {
        let mut regs = Gpr::new(config.general.enforce_zero_register);
        for (name, &value) in &config.init.registers {
            let idx =
                abi::parse_register(name).ok_or_else(|| ConfigError::BadRegister(name.clone()))?;
            regs.write(idx, value)?;
        }

        let mut dmem = DataMemory::new(config.memory.data_size);
        for seed in &config.init.memory {
            dmem.store_doubleword(seed.offset, seed.value)?;
        }

        let slots = vec![None; program.len()];
        Ok(Self {
            regs,
            dmem,
            pc: 0,
            program,
            slots,
            cursors: StageCursors::default(),
            pending: Bubbles::default(),
            forwarding: config.pipeline.forwarding,
            stats: SimStats::default(),
        })
    }

    /// Returns the in-flight slot for program index `idx`.
    pub fn slot(&self, idx: usize) -> Result<&PipeSlot, SimError> {
        self.slots
            .get(idx)
            .and_then(Option::as_ref)
            .ok_or(SimError::SlotNotReady(idx))
    }

    /// Returns the in-flight slot for program index `idx` mutably.
    pub fn slot_mut(&mut self, idx: usize) -> Result<&mut PipeSlot, SimError> {
        self.slots
            .get_mut(idx)
            .and_then(Option::as_mut)
            .ok_or(SimError::SlotNotReady(idx))
    }

    /// Advances the pipeline by one clock cycle.
    ///
    /// # Logic Flow
    /// 1. Fetch and Decode work on their cursors unconditionally.
    /// 2. Execute idles for one cycle when its instruction owes a load-use
    ///    bubble; otherwise it executes.
    /// 3. Memory and Write-back idle when a bubble reaches them.
    /// 4. Cursors advance, except those of idle stages.
    ///
    /// # Errors
    ///
    /// The first [`SimError`] raised by a stage aborts the cycle.
    pub fn tick(&mut self) -> Result<(), SimError> {
        let n = self.program.len();
        let c = self.cursors;

        if let Some(idx) = StageCursors::in_bounds(c.fetch, n) {
            stages::fetch_stage(self, idx)?;
        }
        if let Some(idx) = StageCursors::in_bounds(c.decode, n) {
            stages::decode_stage(self, idx)?;
        }

        let mut ex_bubble = false;
        if let Some(idx) = StageCursors::in_bounds(c.execute, n) {
            let slot = self.slot_mut(idx)?;
            if slot.stall_pending {
                slot.stall_pending = false;
                ex_bubble = true;
                self.stats.stalls_data += 1;
                debug!("cycle {}: bubble in execute", self.stats.cycles);
            } else {
                stages::execute_stage(self, idx)?;
            }
        }

        if !self.pending.memory {
            if let Some(idx) = StageCursors::in_bounds(c.memory, n) {
                stages::mem_stage(self, idx)?;
            }
        }
        if !self.pending.write_back {
            if let Some(idx) = StageCursors::in_bounds(c.write_back, n) {
                stages::wb_stage(self, idx)?;
            }
        }

        debug!(
            "cycle {}: IF={} ID={} EX={} MEM={} WB={}",
            self.stats.cycles,
            occupancy(c.fetch, n),
            occupancy(c.decode, n),
            if ex_bubble { "bubble".to_string() } else { occupancy(c.execute, n) },
            if self.pending.memory { "bubble".to_string() } else { occupancy(c.memory, n) },
            if self.pending.write_back { "bubble".to_string() } else { occupancy(c.write_back, n) },
        );

        let bubbles = Bubbles {
            execute: ex_bubble,
            memory: self.pending.memory,
            write_back: self.pending.write_back,
        };
        self.cursors.advance(bubbles);
        self.pending = bubbles.shift();
        self.stats.cycles += 1;
        Ok(())
    }

    /// Returns `true` once every instruction has been written back.
    pub fn is_drained(&self) -> bool {
        let n = self.program.len() as i64;
        n == 0 || self.cursors.write_back >= n
    }

    /// Ticks until the pipeline drains.
    ///
    /// # Returns
    ///
    /// Whether fetch moved past the last instruction (see [`Cpu::completed`]).
    pub fn run(&mut self) -> Result<bool, SimError> {
        while !self.is_drained() {
            self.tick()?;
        }
        Ok(self.completed())
    }

    /// Returns `true` if the program counter moved past the last
    /// instruction address, or the program is empty.
    pub fn completed(&self) -> bool {
        self.program
            .last_address()
            .map_or(true, |last| self.pc > last)
    }

    /// Number of cycles simulated so far.
    pub fn cycles(&self) -> u64 {
        self.stats.cycles
    }
}

fn occupancy(cursor: i64, n: usize) -> String {
    match StageCursors::in_bounds(cursor, n) {
        Some(idx) => format!("[{}]", idx + 1),
        None => "-".to_string(),
    }
}
