//! Fetch stage: pull trace records into empty FE latch slots.
//!
//! Each empty, unstalled FE lane reads one record and stamps it with the
//! next program-order instruction number. End of trace pins the halt
//! target to the last assigned number; trace faults do the same but are
//! also remembered so the run can exit nonzero after the pipeline drains.

use std::io::Read;

use crate::core::pipeline::latches::InstInfo;
use crate::core::pipeline::Pipeline;

/// Executes the fetch stage.
pub fn fetch_stage<R: Read>(p: &mut Pipeline<R>) {
    for i in 0..p.width {
        if p.fe_latch[i].stall || p.fe_latch[i].is_valid() {
            continue;
        }

        match p.trace.next_record() {
            Ok(Some(rec)) => {
                p.last_inst_num += 1;
                let inst = InstInfo::new(
                    p.last_inst_num,
                    rec.op,
                    rec.dest_reg,
                    rec.src1_reg,
                    rec.src2_reg,
                );
                log::trace!("FE  inst={} op={}", inst.inst_num, inst.op);
                p.fe_latch[i].inst = Some(inst);
                p.fe_latch[i].stall = false;
            }
            Ok(None) => {
                p.end_of_trace();
            }
            Err(e) => {
                log::error!("trace fault at fetch: {}", e);
                if p.trace_error.is_none() {
                    p.trace_error = Some(e);
                }
                p.end_of_trace();
            }
        }
    }
}
