//! Out-of-order pipeline simulator CLI.
//!
//! This binary provides the single entry point for trace-driven runs. It
//! performs:
//! 1. **Configuration:** Built-in defaults, an optional JSON config file,
//!    and per-flag overrides (flags win over the file).
//! 2. **Run:** Drives the pipeline to completion and prints statistics.
//! 3. **Exit status:** 0 on a clean drain; 1 on a trace fault (after the
//!    in-flight instructions drain) or a structural overflow.

use clap::{Parser, ValueEnum};
use std::{fs, process};

use o3sim_core::config::{Config, SchedPolicy};
use o3sim_core::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "o3sim",
    author,
    version,
    about = "Cycle-accurate out-of-order pipeline simulator",
    long_about = "Simulate a trace of decoded instructions through a seven-stage\n\
                  out-of-order superscalar pipeline and report cycle counts.\n\n\
                  Examples:\n  \
                  o3sim traces/qsort.trace\n  \
                  o3sim --width 2 --rob-entries 64 --sched-policy out-of-order traces/qsort.trace\n  \
                  o3sim --config sweep.json traces/qsort.trace"
)]
struct Cli {
    /// Binary trace file to simulate.
    trace: String,

    /// JSON configuration file (flags below override it).
    #[arg(long)]
    config: Option<String>,

    /// Lanes per stage (superscalar width).
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=8))]
    width: Option<u64>,

    /// Re-order buffer capacity.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=256))]
    rob_entries: Option<u64>,

    /// Scheduling policy.
    #[arg(long, value_enum)]
    sched_policy: Option<PolicyArg>,

    /// Load execution latency in cycles (1 = single-cycle loads).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    load_exe_cycles: Option<u32>,

    /// Dump per-cycle latch and structure state to the log
    /// (requires RUST_LOG=debug or lower).
    #[arg(long)]
    trace_pipeline: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    /// Oldest non-executing instruction gates its lane.
    InOrder,
    /// Data-flow order: ready instructions may pass stalled older ones.
    OutOfOrder,
}

impl From<PolicyArg> for SchedPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::InOrder => SchedPolicy::InOrder,
            PolicyArg::OutOfOrder => SchedPolicy::OutOfOrder,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config {}: {}", path, e);
                process::exit(1);
            });
            serde_json::from_str::<Config>(&text).unwrap_or_else(|e| {
                eprintln!("Error parsing config {}: {}", path, e);
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    if let Some(width) = cli.width {
        config.pipeline.width = width as usize;
    }
    if let Some(rob_entries) = cli.rob_entries {
        config.pipeline.rob_entries = rob_entries as usize;
    }
    if let Some(policy) = cli.sched_policy {
        config.pipeline.sched_policy = policy.into();
    }
    if let Some(cycles) = cli.load_exe_cycles {
        config.pipeline.load_exe_cycles = cycles;
    }
    if cli.trace_pipeline {
        config.general.trace_pipeline = true;
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    cmd_run(&cli.trace, &config);
}

/// Runs the simulator over the trace and prints the statistics report.
///
/// Exits nonzero on any simulation error; a trace fault still drains the
/// pipeline (and prints its stats) before the failure status.
fn cmd_run(trace_path: &str, config: &Config) {
    println!("\n** PIPELINE IS {} WIDE **\n", config.pipeline.width);

    let mut sim = match Simulator::open(trace_path, config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("[!] FATAL: couldn't open trace '{}': {}", trace_path, e);
            process::exit(1);
        }
    };

    match sim.run() {
        Ok(()) => {
            sim.stats().print();
        }
        Err(e) => {
            eprintln!("\n[!] {}", e);
            sim.stats().print();
            process::exit(1);
        }
    }
}
