//! Commit stage: retire instructions from the ROB head in program order.
//!
//! Up to `width` ready head entries retire per cycle. Retiring an
//! instruction frees its RAT alias only when the alias still names this
//! instruction — a younger producer of the same register must keep its
//! entry. Retirement of the last trace instruction raises the halt flag.
//! Each retire also refreshes the matching ID latch stall bit from the
//! ROB occupancy, releasing issue backpressure as soon as space exists.

use std::io::Read;

use crate::core::pipeline::Pipeline;

/// Executes the commit stage.
pub fn commit_stage<R: Read>(p: &mut Pipeline<R>) {
    for i in 0..p.width {
        let Some(inst) = p.rob.commit_head() else {
            break;
        };

        log::trace!("CM  inst={} RETIRE", inst.inst_num);
        p.stats.record_retired(inst.op);

        if inst.inst_num >= p.halt_inst_num {
            p.halt = true;
        }

        // Free the alias unless a younger writer has already claimed it.
        if let (Some(dest), Some(tag)) = (inst.dest_reg, inst.dest_tag) {
            p.rat.clear_if_match(dest, tag);
        }

        p.id_latch[i].stall = !p.rob.has_space();
    }
}
