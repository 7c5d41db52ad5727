//! Simulation statistics collection and reporting.
//!
//! Tracks cycle and instruction counts, data-hazard stalls, forwarding
//! activity, branch outcomes and the retired instruction mix.

use std::time::Instant;

use serde::Serialize;

/// Simulation statistics structure tracking all performance metrics.
///
/// Counters are updated by the pipeline stages as instructions flow through
/// and can be serialized for machine-readable reports.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    pub cycles: u64,
    pub instructions_retired: u64,

    pub inst_load: u64,
    pub inst_store: u64,
    pub inst_branch: u64,
    pub inst_alu: u64,
    pub inst_nop: u64,

    pub stalls_data: u64,

    pub forwards_ex_mem: u64,
    pub forwards_mem_wb: u64,

    pub branches: u64,
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_alu: 0,
            inst_nop: 0,
            stalls_data: 0,
            forwards_ex_mem: 0,
            forwards_mem_wb: 0,
            branches: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Instructions retired per cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Prints a formatted summary of all simulation statistics.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();

        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let instr = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        };
        let cpi = cyc as f64 / instr as f64;

        println!("\n==========================================================");
        println!("RISC-V PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", self.ipc());
        println!("sim_cpi                  {:.4}", cpi);
        println!("----------------------------------------------------------");
        println!("HAZARDS");
        println!(
            "  stalls.data            {} ({:.2}%)",
            self.stalls_data,
            (self.stalls_data as f64 / cyc as f64) * 100.0
        );
        println!("  forward.ex_mem         {}", self.forwards_ex_mem);
        println!("  forward.mem_wb         {}", self.forwards_mem_wb);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        let total_inst = instr as f64;
        for (name, count) in [
            ("op.alu", self.inst_alu),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.branch", self.inst_branch),
            ("op.nop", self.inst_nop),
        ] {
            println!(
                "  {:<22} {} ({:.2}%)",
                name,
                count,
                (count as f64 / total_inst) * 100.0
            );
        }
        println!("----------------------------------------------------------");
        println!("BRANCHES (not redirected)");
        println!("  branch.decoded         {}", self.branches);
        println!("  branch.would_take      {}", self.branches_taken);
        println!("==========================================================");
    }
}
