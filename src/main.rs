//! RISC-V Pipeline Simulator CLI.
//!
//! The main executable for the simulator. It handles command-line argument
//! parsing, logging setup, trace loading and the simulation run.
//!
//! # Usage
//!
//! ```text
//! pipesim --file program.txt [--config configs/default.toml] [--json] [--trace]
//! ```

use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use riscv_pipesim::config::Config;
use riscv_pipesim::core::Cpu;
use riscv_pipesim::sim::loader;
use riscv_pipesim::sim::report::{self, RunReport, RULE};

/// Command-line arguments for the pipeline simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "RISC-V Five-Stage Pipeline Simulator")]
struct Args {
    /// Assembly trace to simulate.
    #[arg(short, long)]
    file: String,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<String>,

    /// Print a JSON report instead of the text dump.
    #[arg(long)]
    json: bool,

    /// Emit per-stage trace events.
    #[arg(long)]
    trace: bool,
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise trace mode selects the `trace`
/// level and everything else only shows warnings.
fn init_tracing(trace: bool) {
    let default_level = if trace { "trace" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

fn fatal(msg: impl std::fmt::Display) -> ! {
    eprintln!("\n[!] FATAL: {}", msg);
    process::exit(1);
}

/// Main entry point for the pipeline simulator.
///
/// # Behavior
///
/// 1. **Configuration**: Parses command-line arguments and loads the optional TOML file.
/// 2. **Loader**: Assembles the trace into an instruction store.
/// 3. **Initialization**: Builds the `Cpu` and applies the `[init]` seeds.
/// 4. **Simulation**: Ticks the pipeline until every instruction is written back.
/// 5. **Teardown**: Prints the final state and statistics, or a JSON report.
fn main() {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path).unwrap_or_else(|e| fatal(e)),
        None => Config::default(),
    };

    let trace =
        args.trace || config.general.trace_instructions || cfg!(feature = "always-trace");
    init_tracing(trace);

    if !args.json {
        println!("Loading trace file: {}", args.file);
    }
    let program = loader::load_trace(&args.file).unwrap_or_else(|e| fatal(e));
    let mut cpu = Cpu::new(program, &config).unwrap_or_else(|e| fatal(e));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.json {
        let dump = report::write_program(&mut out, &cpu.program)
            .and_then(|_| writeln!(out, "\n{}\n", RULE))
            .and_then(|_| report::write_state(&mut out, "Original", &cpu))
            .and_then(|_| writeln!(out, "\n{}", RULE));
        if let Err(e) = dump {
            fatal(e);
        }
    }

    if let Err(e) = cpu.run() {
        drop(out);
        eprintln!("\n[!] FATAL: {}", e);
        cpu.stats.print();
        process::exit(1);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&RunReport::from_cpu(&cpu))
            .unwrap_or_else(|e| fatal(e));
        if let Err(e) = writeln!(out, "{}", json) {
            fatal(e);
        }
        return;
    }

    let dump = writeln!(out, "\nNumber of clock cycles: {}\n", cpu.cycles())
        .and_then(|_| writeln!(out, "{}\n", RULE))
        .and_then(|_| report::write_state(&mut out, "Final", &cpu));
    if let Err(e) = dump {
        fatal(e);
    }
    drop(out);

    cpu.stats.print();
    println!("\nSimulation is finished.");
}
