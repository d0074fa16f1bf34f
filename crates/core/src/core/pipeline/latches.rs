//! Pipeline latch structures and the in-flight instruction record.
//!
//! This module defines the payload carried between the seven pipeline
//! stages: Fetch -> Decode -> Issue -> Schedule -> Execute -> Writeback ->
//! Commit. The same `InstInfo` record travels through the latches and is
//! the authoritative copy held by the re-order buffer from issue to commit.

use crate::common::ArchReg;
use crate::core::pipeline::rob::RobTag;
use crate::isa::OpType;

/// An in-flight instruction, annotated as it moves down the pipe.
///
/// Fetch fills the trace-derived fields and assigns `inst_num`; issue
/// fills the rename tags; writeback flips source-ready bits on dependents
/// via the ROB wakeup broadcast.
#[derive(Clone, Debug, Default)]
pub struct InstInfo {
    /// Program-order instruction number, assigned at fetch starting at 1.
    pub inst_num: u64,
    /// Instruction class.
    pub op: OpType,
    /// Destination register, if written.
    pub dest_reg: Option<ArchReg>,
    /// First source register, if read.
    pub src1_reg: Option<ArchReg>,
    /// Second source register, if read.
    pub src2_reg: Option<ArchReg>,
    /// ROB slot this instruction was renamed onto (assigned at issue).
    pub dest_tag: Option<RobTag>,
    /// In-flight producer of source 1; `None` once the value is committed
    /// or when no producer was in flight at issue time.
    pub src1_tag: Option<RobTag>,
    /// In-flight producer of source 2.
    pub src2_tag: Option<RobTag>,
    /// Whether source 1 has been produced.
    pub src1_ready: bool,
    /// Whether source 2 has been produced.
    pub src2_ready: bool,
}

impl InstInfo {
    /// Creates a fetched instruction from a decoded trace record.
    pub fn new(
        inst_num: u64,
        op: OpType,
        dest_reg: Option<ArchReg>,
        src1_reg: Option<ArchReg>,
        src2_reg: Option<ArchReg>,
    ) -> Self {
        Self {
            inst_num,
            op,
            dest_reg,
            src1_reg,
            src2_reg,
            dest_tag: None,
            src1_tag: None,
            src2_tag: None,
            src1_ready: false,
            src2_ready: false,
        }
    }

    /// True when both source operands are available for scheduling.
    ///
    /// A source is available when the instruction does not read it at all
    /// or when its ready bit has been set (at issue or by wakeup).
    #[inline]
    pub fn operands_ready(&self) -> bool {
        (self.src1_reg.is_none() || self.src1_ready)
            && (self.src2_reg.is_none() || self.src2_ready)
    }
}

/// One inter-stage latch slot.
///
/// A slot either holds an instruction or is empty; the stall bit keeps an
/// upstream stage from refilling it while downstream backpressure lasts.
#[derive(Clone, Debug, Default)]
pub struct Latch {
    /// Set while the slot must not accept or forward an instruction.
    pub stall: bool,
    /// The instruction occupying the slot, if any.
    pub inst: Option<InstInfo>,
}

impl Latch {
    /// True when the slot holds an instruction.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.inst.is_some()
    }
}
