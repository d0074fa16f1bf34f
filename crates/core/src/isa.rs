//! Instruction classification.
//!
//! The simulator models timing, not function: the only property of an
//! instruction that matters to the datapath is whether it is load-class
//! (multi-cycle) or single-cycle. Op types beyond that distinction exist
//! so the statistics report can break down the instruction mix.

use std::fmt;

/// Number of op types a trace record may carry. Any encoded value at or
/// above this is a malformed trace.
pub const NUM_OP_TYPES: u8 = 5;

/// Instruction class as encoded in the trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OpType {
    /// Integer ALU operation (single-cycle).
    #[default]
    Alu = 0,
    /// Memory load. The only multi-cycle class; see
    /// `PipelineConfig::load_exe_cycles`.
    Load = 1,
    /// Memory store (single-cycle in this model).
    Store = 2,
    /// Conditional branch (single-cycle; no prediction is modeled).
    CondBranch = 3,
    /// Anything else (single-cycle).
    Other = 4,
}

impl OpType {
    /// Decodes a trace op byte. Returns `None` for values outside the
    /// enumeration.
    pub fn from_trace(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(OpType::Alu),
            1 => Some(OpType::Load),
            2 => Some(OpType::Store),
            3 => Some(OpType::CondBranch),
            4 => Some(OpType::Other),
            _ => None,
        }
    }

    /// Execution latency in cycles. Loads take `load_exe_cycles`; every
    /// other class takes one cycle.
    #[inline]
    pub fn latency(self, load_exe_cycles: u32) -> u32 {
        match self {
            OpType::Load => load_exe_cycles,
            _ => 1,
        }
    }

}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpType::Alu => "alu",
            OpType::Load => "load",
            OpType::Store => "store",
            OpType::CondBranch => "branch",
            OpType::Other => "other",
        };
        write!(f, "{}", name)
    }
}
