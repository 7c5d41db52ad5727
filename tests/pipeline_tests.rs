//! End-to-end pipeline tests.
//!
//! Programs are assembled from text, seeded through [`Config`] and run to
//! completion. Cycle counts follow `instructions + 4 + stalls`.

use riscv_pipesim::common::{AccessType, SimError};
use riscv_pipesim::config::{Config, MemorySeed};
use riscv_pipesim::core::pipeline::hazards::ForwardingPolicy;
use riscv_pipesim::core::Cpu;
use riscv_pipesim::sim::loader::assemble;
use riscv_pipesim::sim::program::Program;

/// Builds a CPU for `source` under `config`.
fn cpu_with(source: &str, config: &Config) -> Cpu {
    let program = assemble(source).expect("program assembles");
    Cpu::new(program, config).expect("config applies")
}

/// Runs `source` to completion under `config`.
fn run_with(source: &str, config: &Config) -> Cpu {
    let mut cpu = cpu_with(source, config);
    assert!(cpu.run().expect("run succeeds"));
    cpu
}

/// Runs `source` under the default configuration.
fn run(source: &str) -> Cpu {
    run_with(source, &Config::default())
}

fn reg(cpu: &Cpu, idx: usize) -> i64 {
    cpu.regs.read(idx).unwrap()
}

/// Tests a short dependent arithmetic sequence.
#[test]
fn test_arith_sequence() {
    let cpu = run("addi x1, x0, 5\naddi x2, x0, 10\nadd x3, x1, x2\n");
    assert_eq!(reg(&cpu, 1), 5);
    assert_eq!(reg(&cpu, 2), 10);
    assert_eq!(reg(&cpu, 3), 15);
    assert_eq!(cpu.cycles(), 7);
    assert_eq!(cpu.stats.stalls_data, 0);
    assert_eq!(cpu.stats.instructions_retired, 3);
    assert_eq!(cpu.stats.inst_alu, 3);
    assert_eq!(cpu.stats.forwards_ex_mem, 1);
    assert_eq!(cpu.stats.forwards_mem_wb, 1);
}

/// Tests that a lone instruction takes the full pipeline depth.
#[test]
fn test_single_instruction_latency() {
    let cpu = run("addi x1, x0, 1");
    assert_eq!(cpu.cycles(), 5);
    assert_eq!(reg(&cpu, 1), 1);
}

/// Tests that an empty program is already drained.
#[test]
fn test_empty_program() {
    let mut cpu = Cpu::new(Program::new(), &Config::default()).unwrap();
    assert!(cpu.is_drained());
    assert_eq!(cpu.run(), Ok(true));
    assert_eq!(cpu.cycles(), 0);
}

/// Tests the classic load-use case: one bubble, loaded value forwarded.
#[test]
fn test_load_use_stall() {
    let mut config = Config::default();
    config.init.memory.push(MemorySeed {
        offset: 40,
        value: 100,
    });
    let cpu = run_with("lw x5, 40(x1)\nadd x6, x5, x5\n", &config);
    assert_eq!(reg(&cpu, 5), 100);
    assert_eq!(reg(&cpu, 6), 200);
    assert_eq!(cpu.stats.stalls_data, 1);
    assert_eq!(cpu.cycles(), 7);
}

/// Tests that loads are full doublewords regardless of the mnemonic width.
#[test]
fn test_load_width_insensitive() {
    let mut config = Config::default();
    config.init.memory.push(MemorySeed {
        offset: 0,
        value: 0x1_0000_0002,
    });
    let cpu = run_with("lb x1, 0(x0)\nlw x2, 0(x0)\n", &config);
    assert_eq!(reg(&cpu, 1), 0x1_0000_0002);
    assert_eq!(reg(&cpu, 2), 0x1_0000_0002);
}

/// Tests a chain of dependent loads: one bubble per hazard.
#[test]
fn test_chained_load_use() {
    let mut config = Config::default();
    config.init.memory.push(MemorySeed { offset: 0, value: 8 });
    config.init.memory.push(MemorySeed {
        offset: 8,
        value: 21,
    });
    let cpu = run_with("ld x5, 0(x1)\nld x6, 0(x5)\nadd x7, x6, x6\n", &config);
    assert_eq!(reg(&cpu, 5), 8);
    assert_eq!(reg(&cpu, 6), 21);
    assert_eq!(reg(&cpu, 7), 42);
    assert_eq!(cpu.stats.stalls_data, 2);
    assert_eq!(cpu.cycles(), 3 + 4 + 2);
}

/// Tests that an independent instruction after a load does not stall.
#[test]
fn test_load_without_dependency() {
    let cpu = run("ld x5, 0(x0)\naddi x6, x1, 5\nadd x7, x5, x6\n");
    assert_eq!(cpu.stats.stalls_data, 0);
    assert_eq!(cpu.cycles(), 7);
    assert_eq!(reg(&cpu, 7), 5);
}

/// Tests forwarding from one instruction ahead.
#[test]
fn test_forward_ex_mem() {
    let mut config = Config::default();
    config.init.registers.insert("x1".into(), 4);
    config.init.registers.insert("x2".into(), 6);
    config.init.registers.insert("x3".into(), 1);
    let cpu = run_with("add x5, x1, x2\nadd x6, x5, x3\n", &config);
    assert_eq!(reg(&cpu, 5), 10);
    assert_eq!(reg(&cpu, 6), 11);
    assert_eq!(cpu.stats.forwards_ex_mem, 1);
    assert_eq!(cpu.stats.stalls_data, 0);
}

/// Tests forwarding precedence under both policies.
#[test]
fn test_forwarding_policies() {
    let source = "addi x5, x0, 1\naddi x5, x0, 2\nadd x6, x5, x0\n";

    let cpu = run(source);
    assert_eq!(reg(&cpu, 6), 2);
    assert_eq!(reg(&cpu, 5), 2);

    let mut legacy = Config::default();
    legacy.pipeline.forwarding = ForwardingPolicy::Legacy;
    let cpu = run_with(source, &legacy);
    assert_eq!(reg(&cpu, 6), 1);
    assert_eq!(reg(&cpu, 5), 2);
}

/// Tests the store path and a following load from the same address.
#[test]
fn test_store_then_load() {
    let cpu = run("addi x1, x0, 7\nsd x1, 16(x0)\nld x2, 16(x0)\n");
    assert_eq!(cpu.dmem.load_doubleword(16), Ok(7));
    assert_eq!(reg(&cpu, 2), 7);
    assert_eq!(cpu.stats.inst_store, 1);
    assert_eq!(cpu.stats.inst_load, 1);
}

/// Tests that branches are evaluated but never redirect fetch.
#[test]
fn test_branch_not_redirected() {
    let cpu = run("beq x0, x0, 8\naddi x1, x0, 1\naddi x2, x0, 2\n");
    assert_eq!(reg(&cpu, 1), 1);
    assert_eq!(reg(&cpu, 2), 2);
    assert_eq!(cpu.stats.branches, 1);
    assert_eq!(cpu.stats.branches_taken, 1);
    assert_eq!(cpu.stats.inst_branch, 1);
    assert_eq!(cpu.cycles(), 7);

    let cpu = run("addi x1, x0, 1\nbne x1, x1, 8\n");
    assert_eq!(cpu.stats.branches, 1);
    assert_eq!(cpu.stats.branches_taken, 0);
}

/// Tests that an unsupported R-type operation aborts the run.
#[test]
fn test_invalid_alu_operation() {
    let mut cpu = cpu_with("addi x1, x0, 1\nxor x2, x1, x1\n", &Config::default());
    let inst = cpu.program.fetch(4).unwrap().word;
    assert_eq!(
        cpu.run(),
        Err(SimError::InvalidAluOperation { pc: 4, inst })
    );
}

/// Tests that opcodes outside the control table are retired as no-ops.
#[test]
fn test_unrecognized_opcode_is_noop() {
    let cpu = run("addiw x1, x0, 5\n");
    assert_eq!(reg(&cpu, 1), 0);
    assert_eq!(cpu.stats.inst_nop, 1);
    assert_eq!(cpu.stats.instructions_retired, 1);
    assert_eq!(cpu.cycles(), 5);
}

/// Tests that an out-of-range load aborts the run.
#[test]
fn test_memory_out_of_range() {
    let mut cpu = cpu_with("ld x1, 2040(x0)\n", &Config::default());
    assert_eq!(
        cpu.run(),
        Err(SimError::MemoryOutOfRange {
            addr: 2040,
            len: 8,
            access: AccessType::Read
        })
    );
}

/// Tests both zero-register policies.
#[test]
fn test_zero_register_policy() {
    let source = "addi x0, x0, 5\naddi x9, x0, 0\naddi x9, x0, 0\nadd x1, x0, x0\n";

    let cpu = run(source);
    assert_eq!(reg(&cpu, 0), 0);
    assert_eq!(reg(&cpu, 1), 0);

    let mut legacy = Config::default();
    legacy.general.enforce_zero_register = false;
    let cpu = run_with(source, &legacy);
    assert_eq!(reg(&cpu, 0), 5);
    assert_eq!(reg(&cpu, 1), 10);
}

/// Tests single-cycle stepping and the cycle invariant.
#[test]
fn test_tick_by_tick() {
    let mut cpu = cpu_with("addi x1, x0, 3\naddi x2, x1, 4\n", &Config::default());
    for _ in 0..5 {
        cpu.tick().unwrap();
        assert!(!cpu.is_drained());
    }
    assert_eq!(reg(&cpu, 1), 3);
    assert_eq!(reg(&cpu, 2), 0);
    cpu.tick().unwrap();
    assert!(cpu.is_drained());
    assert!(cpu.completed());
    assert_eq!(reg(&cpu, 2), 7);
    assert_eq!(cpu.cycles(), 6);
}
