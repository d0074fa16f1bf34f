//! Out-of-order superscalar pipeline simulator library.
//!
//! This crate implements a cycle-accurate model of an out-of-order,
//! superscalar processor pipeline driven by a binary instruction trace:
//! 1. **Core:** Seven-stage pipeline (fetch, decode, issue, schedule,
//!    execute, writeback, commit) with register renaming and in-order commit.
//! 2. **Datapath:** Register alias table, re-order buffer, and execution
//!    queue for multi-cycle operations.
//! 3. **Trace:** Fixed-layout binary trace record reader.
//! 4. **Simulation:** Run loop, configuration, and statistics collection.

/// Common types and constants (structure capacities, registers, errors).
pub mod common;
/// Simulator configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// CPU core (pipeline engine, datapath structures, stage functions).
pub mod core;
/// Instruction classification (op types and execution latencies).
pub mod isa;
/// Simulation driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;
/// Binary trace record reader.
pub mod trace;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Top-level simulation driver; owns the pipeline and runs it to completion.
pub use crate::sim::Simulator;
/// Simulation error type (trace faults and structural overflows).
pub use crate::common::SimError;
