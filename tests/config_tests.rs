//! Tests for configuration parsing and seeding.

use std::io::Write;

use riscv_pipesim::config::{Config, ConfigError, MemorySeed};
use riscv_pipesim::core::arch::dmem::DEFAULT_DATA_SIZE;
use riscv_pipesim::core::pipeline::hazards::ForwardingPolicy;
use riscv_pipesim::core::Cpu;
use riscv_pipesim::sim::program::Program;

/// Tests the defaults of an empty file.
#[test]
fn test_config_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert!(!config.general.trace_instructions);
    assert!(config.general.enforce_zero_register);
    assert_eq!(config.pipeline.forwarding, ForwardingPolicy::Nearest);
    assert_eq!(config.memory.data_size, DEFAULT_DATA_SIZE);
    assert!(config.init.registers.is_empty());
    assert!(config.init.memory.is_empty());
}

/// Tests a fully specified configuration.
#[test]
fn test_config_full() {
    let config = Config::from_toml_str(
        r#"
[general]
trace_instructions = true
enforce_zero_register = false

[pipeline]
forwarding = "legacy"

[memory]
data_size = 256

[init]
registers = { x5 = 26, t1 = -27 }
memory = [ { offset = 40, value = 100 } ]
"#,
    )
    .unwrap();
    assert!(config.general.trace_instructions);
    assert!(!config.general.enforce_zero_register);
    assert_eq!(config.pipeline.forwarding, ForwardingPolicy::Legacy);
    assert_eq!(config.memory.data_size, 256);
    assert_eq!(config.init.registers.get("x5"), Some(&26));
    assert_eq!(config.init.registers.get("t1"), Some(&-27));
    assert_eq!(
        config.init.memory,
        vec![MemorySeed {
            offset: 40,
            value: 100
        }]
    );
}

/// Tests that seeds land in the CPU state.
#[test]
fn test_config_seeds_cpu() {
    let config = Config::from_toml_str(
        "[init]\nregisters = { x5 = 26, t1 = -27 }\nmemory = [ { offset = 40, value = 100 } ]\n",
    )
    .unwrap();
    let cpu = Cpu::new(Program::new(), &config).unwrap();
    assert_eq!(cpu.regs.read(5), Ok(26));
    assert_eq!(cpu.regs.read(6), Ok(-27));
    assert_eq!(cpu.dmem.load_doubleword(40), Ok(100));
}

/// Tests rejected values.
#[test]
fn test_config_errors() {
    assert!(matches!(
        Config::from_toml_str("[pipeline]\nforwarding = \"farthest\"\n"),
        Err(ConfigError::Parse(_))
    ));

    let config = Config::from_toml_str("[init]\nregisters = { q7 = 1 }\n").unwrap();
    assert!(matches!(
        Cpu::new(Program::new(), &config),
        Err(ConfigError::BadRegister(name)) if name == "q7"
    ));

    let config = Config::from_toml_str(
        "[memory]\ndata_size = 16\n[init]\nmemory = [ { offset = 12, value = 1 } ]\n",
    )
    .unwrap();
    assert!(matches!(
        Cpu::new(Program::new(), &config),
        Err(ConfigError::Seed(_))
    ));
}

/// Tests loading from a file on disk.
#[test]
fn test_config_load_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[memory]\ndata_size = 64").unwrap();
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.memory.data_size, 64);

    assert!(matches!(
        Config::load("/nonexistent/pipesim.toml"),
        Err(ConfigError::Io { .. })
    ));
}
