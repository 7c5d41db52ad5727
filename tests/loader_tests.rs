//! Tests for the trace loader, the instruction store and run reports.

use std::io::Write;

use riscv_pipesim::config::Config;
use riscv_pipesim::core::Cpu;
use riscv_pipesim::isa::encoder::EncodeError;
use riscv_pipesim::sim::loader::{assemble, load_trace, LoadError};
use riscv_pipesim::sim::program::{Program, INST_SIZE};
use riscv_pipesim::sim::report::{write_program, write_state, RunReport};

/// Tests that blank and comment lines are skipped and addresses are dense.
#[test]
fn test_assemble_layout() {
    let program = assemble("# header\n\naddi x1, x0, 5\n   \nadd x3, x1, x2 # sum\n").unwrap();
    assert_eq!(program.len(), 2);
    assert_eq!(program.last_address(), Some(INST_SIZE));
    assert_eq!(program.fetch(0).map(|i| i.word), Some(0x0050_0093));
    assert_eq!(program.fetch(4).map(|i| i.word), Some(0x0020_81b3));
    assert_eq!(program.fetch(2), None);
    assert_eq!(program.fetch(8), None);
}

/// Tests that encode errors carry the source line number.
#[test]
fn test_assemble_error_line() {
    let err = assemble("addi x1, x0, 5\n\nfoo x1\n").unwrap_err();
    match err {
        LoadError::Encode { line, source } => {
            assert_eq!(line, 3);
            assert_eq!(source, EncodeError::UnknownMnemonic("foo".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Tests reading a trace from disk.
#[test]
fn test_load_trace_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "addi x1, x0, 5").unwrap();
    writeln!(file, "addi x2, x0, 10").unwrap();
    let program = load_trace(file.path()).unwrap();
    assert_eq!(program.len(), 2);

    assert!(matches!(
        load_trace("/nonexistent/trace.txt"),
        Err(LoadError::Io { .. })
    ));
}

/// Tests the program listing format.
#[test]
fn test_write_program() {
    let program = Program::from_words([0x0050_0093]);
    let mut out = Vec::new();
    write_program(&mut out, &program).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Instruction at PC: 0\n00000000010100000000000010010011\n"
    );
}

/// Tests the state dump format.
#[test]
fn test_write_state() {
    let mut config = Config::default();
    config.init.registers.insert("x5".into(), 26);
    config.init.registers.insert("x6".into(), -27);
    let mut cpu = Cpu::new(Program::new(), &config).unwrap();
    cpu.dmem.store_doubleword(40, 100).unwrap();

    let mut out = Vec::new();
    write_state(&mut out, "Final", &cpu).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Final register values (only values != 0):\n\
         x[5]: 26\n\
         x[6]: -27\n\
         \n\
         Final memory bytes (only values != 0):\n\
         Mem[40]: 01100100\n"
    );
}

/// Tests the JSON report.
#[test]
fn test_run_report_json() {
    let program = assemble("addi x1, x0, 5\nsd x1, 0(x0)\n").unwrap();
    let mut cpu = Cpu::new(program, &Config::default()).unwrap();
    cpu.run().unwrap();

    let report = RunReport::from_cpu(&cpu);
    assert!(report.completed);
    assert_eq!(report.cycles, 6);
    assert_eq!(report.registers.len(), 32);
    assert_eq!(report.registers[1], 5);

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["cycles"], 6);
    assert_eq!(json["memory"][0]["offset"], 0);
    assert_eq!(json["memory"][0]["value"], 5);
    assert_eq!(json["stats"]["inst_store"], 1);
    assert!(json["stats"].get("start_time").is_none());
}
