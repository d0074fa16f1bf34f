//! Execute stage: single-cycle passthrough or multi-cycle countdown.
//!
//! When loads are configured single-cycle every instruction finishes the
//! cycle it was scheduled, so SC slots copy straight to the matching EX
//! slots and the execution queue is never touched. Otherwise scheduled
//! instructions are drained into the queue, the queue ticks once, and
//! every entry that finished moves into successive EX slots.

use std::io::Read;

use crate::common::constants::MAX_WRITEBACKS;
use crate::common::SimError;
use crate::core::pipeline::Pipeline;

/// Executes the execute stage.
///
/// Fails with `SimError::ExeqOverflow` if a scheduled instruction cannot
/// enter the execution queue; the engine treats that as fatal.
pub fn execute_stage<R: Read>(p: &mut Pipeline<R>) -> Result<(), SimError> {
    if p.load_exe_cycles == 1 {
        // Everything is single-cycle: index-preserving SC -> EX copy.
        for i in 0..p.width {
            if let Some(inst) = p.sc_latch[i].inst.take() {
                log::trace!("EX  inst={}", inst.inst_num);
                p.ex_latch[i].inst = Some(inst);
                p.ex_latch[i].stall = false;
            }
        }
        return Ok(());
    }

    for i in 0..p.width {
        if let Some(inst) = p.sc_latch[i].inst.take() {
            let latency = inst.op.latency(p.load_exe_cycles);
            log::trace!("EX  inst={} latency={}", inst.inst_num, latency);
            if !p.exeq.insert(inst, latency) {
                p.halt = true;
                return Err(SimError::ExeqOverflow);
            }
        }
    }

    p.exeq.cycle();

    for i in 0..MAX_WRITEBACKS {
        match p.exeq.remove_done() {
            Some(inst) => {
                p.ex_latch[i].inst = Some(inst);
                p.ex_latch[i].stall = false;
            }
            None => break,
        }
    }

    Ok(())
}
