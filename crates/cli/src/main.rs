//! Pipelined 8-bit CPU simulator CLI.
//!
//! This binary assembles a program file and runs it to completion. It performs:
//! 1. **Setup:** Loads an optional JSON configuration and installs logging.
//! 2. **Run:** Assembles the program, loads it and ticks until the pipeline drains.
//! 3. **Report:** Prints registers, program counter, non-zero data memory and optional statistics.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pipesim_core::common::SimError;
use pipesim_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "pipesim",
    author,
    version,
    about = "Two-latch pipelined 8-bit CPU simulator",
    long_about = "Assemble a program and run it on a fetch/decode/execute pipeline.\n\nExamples:\n  pipesim run program.asm\n  pipesim run program.asm --config sim.json --stats\n  RUST_LOG=debug pipesim run program.asm"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble and run a program until the pipeline drains.
    Run {
        /// Assembly source, one instruction per line.
        program: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log every pipeline event, including latch contents.
        #[arg(long)]
        trace: bool,

        /// Print run statistics after the final state.
        #[arg(long)]
        stats: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            program,
            config,
            trace,
            stats,
        } => {
            init_logging(trace);
            match cmd_run(&program, config.as_deref(), trace, stats) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("\n[!] FATAL: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Installs the global subscriber; `RUST_LOG` wins over `--trace`.
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads configuration and program, runs to completion, and prints the final state.
fn cmd_run(
    program: &Path,
    config_path: Option<&Path>,
    trace: bool,
    show_stats: bool,
) -> Result<(), SimError> {
    let mut config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.general.trace_pipeline |= trace;

    println!("[*] Program: {}", program.display());
    println!(
        "    Instruction memory: {} words  Data memory: {} bytes",
        config.memory.instruction_words, config.memory.data_bytes
    );

    let mut sim = Simulator::from_file(&config, program)?;
    let result = sim.run();

    println!();
    println!("{}", sim.cpu.regs);
    println!("Data memory:");
    println!("{}", sim.cpu.dmem);

    let summary = result?;
    println!("\n[*] Completed in {} cycles", summary.cycles);
    if show_stats {
        summary.stats.print();
    }
    Ok(())
}
