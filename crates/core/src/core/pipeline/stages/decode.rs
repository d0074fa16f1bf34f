//! Decode stage: move fetched instructions to the ID latches in trace
//! order.
//!
//! Fetch fills FE lanes in arbitrary slot order, so each empty ID lane
//! searches the FE latches for the instruction whose number matches the
//! "next to decode" counter. This keeps decode emitting strictly in
//! program order.

use std::io::Read;

use crate::core::pipeline::Pipeline;

/// Executes the decode stage.
pub fn decode_stage<R: Read>(p: &mut Pipeline<R>) {
    for i in 0..p.width {
        if p.id_latch[i].stall || p.id_latch[i].is_valid() {
            continue;
        }

        for j in 0..p.width {
            let matches = p.fe_latch[j]
                .inst
                .as_ref()
                .is_some_and(|inst| inst.inst_num == p.next_decode_num);
            if matches {
                log::trace!("ID  inst={}", p.next_decode_num);
                p.id_latch[i].inst = p.fe_latch[j].inst.take();
                p.id_latch[i].stall = false;
                p.next_decode_num += 1;
                break;
            }
        }
    }
}
