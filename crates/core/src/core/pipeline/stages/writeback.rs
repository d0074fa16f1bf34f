//! Writeback stage: mark finished instructions ready and wake dependents.
//!
//! For every occupied EX slot the producer's tag is broadcast through the
//! ROB (flipping dependent source operands to ready) and the producer's
//! own entry is marked ready to commit. Schedule runs after this stage in
//! the reverse order, so a woken dependent may be picked later in the
//! same cycle; the producer itself cannot commit until the next one.

use std::io::Read;

use crate::common::constants::MAX_WRITEBACKS;
use crate::core::pipeline::Pipeline;

/// Executes the writeback stage.
pub fn writeback_stage<R: Read>(p: &mut Pipeline<R>) {
    for i in 0..MAX_WRITEBACKS {
        if p.ex_latch[i].stall {
            continue;
        }
        let Some(inst) = p.ex_latch[i].inst.take() else {
            continue;
        };

        if let Some(tag) = inst.dest_tag {
            log::trace!("WB  inst={} tag={}", inst.inst_num, tag.index());
            p.rob.wakeup(tag);
            p.rob.mark_ready(tag);
        }
    }
}
