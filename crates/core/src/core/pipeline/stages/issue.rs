//! Issue stage: ROB allocation and register renaming.
//!
//! Decoded instructions enter the ROB here. Source tags are captured from
//! the RAT BEFORE the destination alias is updated, so an instruction
//! reading its own destination register gets the previous producer's tag,
//! not its own. A source with no in-flight producer is ready immediately;
//! a source whose producer has already written back is ready as well.
//!
//! Backpressure is strictly monotonic within a cycle: once one lane
//! stalls on a full ROB, every later lane stalls too, so no instruction
//! issues past an older stalled one.

use std::io::Read;

use crate::core::pipeline::Pipeline;

/// Executes the issue stage.
pub fn issue_stage<R: Read>(p: &mut Pipeline<R>) {
    // Decode's inner search may have filled the ID lanes out of slot
    // order; restore program order before issuing (empty slots sort last).
    p.id_latch
        .sort_by_key(|l| l.inst.as_ref().map_or(u64::MAX, |inst| inst.inst_num));

    let mut stalled = false;
    for i in 0..p.width {
        if stalled {
            p.id_latch[i].stall = true;
            continue;
        }
        p.id_latch[i].stall = false;

        if !p.id_latch[i].is_valid() {
            continue;
        }
        if !p.rob.has_space() {
            p.id_latch[i].stall = true;
            stalled = true;
            continue;
        }

        let Some(mut inst) = p.id_latch[i].inst.take() else {
            continue;
        };

        // Rename sources from the current RAT state.
        if let Some(reg) = inst.src1_reg {
            match p.rat.get_producer(reg) {
                None => {
                    // Latest value already committed to the ARF.
                    inst.src1_tag = None;
                    inst.src1_ready = true;
                }
                Some(tag) => {
                    inst.src1_tag = Some(tag);
                    inst.src1_ready = p.rob.is_ready(tag);
                }
            }
        }
        if let Some(reg) = inst.src2_reg {
            match p.rat.get_producer(reg) {
                None => {
                    inst.src2_tag = None;
                    inst.src2_ready = true;
                }
                Some(tag) => {
                    inst.src2_tag = Some(tag);
                    inst.src2_ready = p.rob.is_ready(tag);
                }
            }
        }

        match p.rob.allocate(inst) {
            Ok(tag) => {
                log::trace!(
                    "IS  inst={} tag={}",
                    p.rob.slot(tag).inst.inst_num,
                    tag.index()
                );
                if let Some(dest) = p.rob.slot(tag).inst.dest_reg {
                    p.rat.set_producer(dest, tag);
                }
            }
            Err(inst) => {
                // has_space was checked above; keep the instruction
                // latched and treat a refusal like a full ROB anyway.
                p.id_latch[i].inst = Some(inst);
                p.id_latch[i].stall = true;
                stalled = true;
            }
        }
    }
}
