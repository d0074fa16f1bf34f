//! Configuration system for the pipeline simulator.
//!
//! This module defines all configuration structures and enums used to
//! parameterize a run. It provides:
//! 1. **Defaults:** Baseline pipeline constants (width, ROB size, latencies).
//! 2. **Structures:** Hierarchical config for general settings and the
//!    pipeline proper.
//! 3. **Enums:** The scheduling policy selector.
//!
//! Configuration is supplied via JSON (`serde_json`) or built by the CLI
//! from individual flags; use `Config::default()` as the baseline.

use serde::Deserialize;

use crate::common::constants::{MAX_PIPE_WIDTH, MAX_ROB_ENTRIES};

/// Default configuration constants for the simulator.
///
/// These values define the baseline pipeline configuration when not
/// explicitly overridden.
mod defaults {
    /// Default pipeline width (1 instruction per cycle: scalar).
    pub const PIPE_WIDTH: usize = 1;

    /// Default number of re-order buffer entries.
    pub const ROB_ENTRIES: usize = 32;

    /// Default load execution latency in cycles.
    ///
    /// A value of 1 makes loads single-cycle and bypasses the execution
    /// queue entirely.
    pub const LOAD_EXE_CYCLES: u32 = 1;
}

/// How the pipeline schedules instructions for execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SchedPolicy {
    /// The oldest non-executing instruction gates its lane: if it is not
    /// ready, nothing younger is scheduled this cycle.
    #[default]
    InOrder,
    /// Data-flow order: the oldest *ready* non-executing instruction is
    /// picked, skipping stalled older ones.
    OutOfOrder,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use o3sim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.pipeline.width, 1);
/// assert_eq!(config.pipeline.rob_entries, 32);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use o3sim_core::config::{Config, SchedPolicy};
///
/// let json = r#"{
///     "general": { "trace_pipeline": true },
///     "pipeline": {
///         "width": 2,
///         "rob_entries": 64,
///         "sched_policy": "OutOfOrder",
///         "load_exe_cycles": 4
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.pipeline.width, 2);
/// assert_eq!(config.pipeline.sched_policy, SchedPolicy::OutOfOrder);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline geometry and policies.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Checks every tunable against its allowed range.
    ///
    /// The CLI range-checks its flags as well; this guards the JSON path
    /// and programmatic construction.
    pub fn validate(&self) -> Result<(), String> {
        let p = &self.pipeline;
        if p.width < 1 || p.width > MAX_PIPE_WIDTH {
            return Err(format!(
                "pipeline.width must be in [1, {}], got {}",
                MAX_PIPE_WIDTH, p.width
            ));
        }
        if p.rob_entries < 1 || p.rob_entries > MAX_ROB_ENTRIES {
            return Err(format!(
                "pipeline.rob_entries must be in [1, {}], got {}",
                MAX_ROB_ENTRIES, p.rob_entries
            ));
        }
        if p.load_exe_cycles < 1 {
            return Err("pipeline.load_exe_cycles must be at least 1".to_string());
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Dump per-cycle latch and structure state to the log.
    #[serde(default)]
    pub trace_pipeline: bool,
}

/// Pipeline geometry and scheduling configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Lanes per stage (superscalar width), in `[1, MAX_PIPE_WIDTH]`.
    #[serde(default = "PipelineConfig::default_width")]
    pub width: usize,

    /// Re-order buffer capacity, in `[1, MAX_ROB_ENTRIES]`.
    #[serde(default = "PipelineConfig::default_rob_entries")]
    pub rob_entries: usize,

    /// Scheduling policy.
    #[serde(default)]
    pub sched_policy: SchedPolicy,

    /// Load execution latency in cycles; 1 bypasses the execution queue.
    #[serde(default = "PipelineConfig::default_load_exe_cycles")]
    pub load_exe_cycles: u32,
}

impl PipelineConfig {
    /// Returns the default pipeline width.
    fn default_width() -> usize {
        defaults::PIPE_WIDTH
    }

    /// Returns the default re-order buffer capacity.
    fn default_rob_entries() -> usize {
        defaults::ROB_ENTRIES
    }

    /// Returns the default load execution latency.
    fn default_load_exe_cycles() -> u32 {
        defaults::LOAD_EXE_CYCLES
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            width: defaults::PIPE_WIDTH,
            rob_entries: defaults::ROB_ENTRIES,
            sched_policy: SchedPolicy::default(),
            load_exe_cycles: defaults::LOAD_EXE_CYCLES,
        }
    }
}
