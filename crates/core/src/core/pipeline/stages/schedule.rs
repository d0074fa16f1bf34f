//! Schedule stage: pick ROB entries to send into execution.
//!
//! Each lane scans the ROB from the head in program order. Under the
//! in-order policy the oldest non-executing instruction gates the lane:
//! if its operands are not ready nothing younger may go. Under the
//! out-of-order policy not-ready instructions are skipped and the oldest
//! ready one is taken (data-flow order).
//!
//! A selected instruction is marked executing in the ROB and a copy of
//! its (renamed, wakeup-updated) record is latched for the execute stage.

use std::io::Read;

use crate::config::SchedPolicy;
use crate::core::pipeline::rob::{Rob, RobTag};
use crate::core::pipeline::Pipeline;

/// Executes the schedule stage.
pub fn schedule_stage<R: Read>(p: &mut Pipeline<R>) {
    for lane in 0..p.width {
        let pick = match p.sched_policy {
            SchedPolicy::InOrder => pick_in_order(&p.rob),
            SchedPolicy::OutOfOrder => pick_out_of_order(&p.rob),
        };

        match pick {
            Some(tag) => {
                p.rob.mark_exec(tag);
                let inst = p.rob.slot(tag).inst.clone();
                log::trace!("SC  inst={} tag={}", inst.inst_num, tag.index());
                p.sc_latch[lane].inst = Some(inst);
                p.sc_latch[lane].stall = false;
            }
            None => {
                p.sc_latch[lane].inst = None;
            }
        }
    }
}

/// In-order selection: the oldest non-executing instruction, but only if
/// its operands are ready. A not-ready oldest instruction blocks the lane
/// (and, because every lane scans the same way, the whole cycle).
fn pick_in_order(rob: &Rob) -> Option<RobTag> {
    let (tag, slot) = rob
        .slots_in_order()
        .find(|(_, slot)| slot.valid && !slot.exec)?;
    if slot.inst.operands_ready() {
        Some(tag)
    } else {
        None
    }
}

/// Out-of-order selection: the oldest instruction that is valid, not yet
/// executing, and has both operands ready.
fn pick_out_of_order(rob: &Rob) -> Option<RobTag> {
    rob.slots_in_order()
        .find(|(_, slot)| slot.valid && !slot.exec && slot.inst.operands_ready())
        .map(|(tag, _)| tag)
}
