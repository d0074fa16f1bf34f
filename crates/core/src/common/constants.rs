//! Structure capacities and architectural limits.
//!
//! These bounds size the fixed structures of the pipeline. Per-run
//! configuration (`crate::config`) may select smaller values but never
//! larger ones.

/// Number of architectural registers defined by the ISA.
pub const MAX_ARF_REGS: usize = 32;

/// Maximum allowed pipeline width (lanes per stage).
pub const MAX_PIPE_WIDTH: usize = 8;

/// Maximum allowed number of re-order buffer entries.
pub const MAX_ROB_ENTRIES: usize = 256;

/// Maximum number of instructions that can complete execution in a single
/// cycle. Sizes both the execution queue and the EX latch array.
pub const MAX_WRITEBACKS: usize = 256;
