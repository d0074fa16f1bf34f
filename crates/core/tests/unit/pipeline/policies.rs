//! Scheduling policy behavior.
//!
//! A long load followed by a dependent instruction and an independent
//! load separates the two policies: in-order scheduling keeps the
//! independent load waiting behind the stalled dependent, while
//! out-of-order scheduling lets it start executing immediately.

use o3sim_core::config::SchedPolicy;

use crate::common::builder::{TraceBuilder, TraceInst};
use crate::common::harness::TestContext;

fn policy_trace() -> Vec<u8> {
    TraceBuilder::new()
        .push(TraceInst::load().dest(1)) // I1: 4-cycle load
        .push(TraceInst::alu().src1(1).dest(2)) // I2: waits on I1
        .push(TraceInst::load().dest(3)) // I3: independent 4-cycle load
        .build()
}

#[test]
fn in_order_blocks_independent_work_behind_a_stall() {
    // I3 cannot schedule until I2 has gone: its load doesn't start until
    // cycle 11 and the run stretches to 16 cycles.
    let mut ctx = TestContext::new(policy_trace(), |c| {
        c.pipeline.rob_entries = 4;
        c.pipeline.load_exe_cycles = 4;
        c.pipeline.sched_policy = SchedPolicy::InOrder;
    });

    ctx.run_to_halt().unwrap();
    assert_eq!(ctx.retired(), 3);
    assert_eq!(ctx.cycles(), 16);
}

#[test]
fn out_of_order_lets_ready_work_pass_a_stall() {
    // I3 skips past the sleeping I2 and overlaps its load with I1's,
    // shaving three cycles off the in-order run. Commit order is still
    // I1, I2, I3 — the harness checks program order in the ROB.
    let mut ctx = TestContext::new(policy_trace(), |c| {
        c.pipeline.rob_entries = 4;
        c.pipeline.load_exe_cycles = 4;
        c.pipeline.sched_policy = SchedPolicy::OutOfOrder;
    });

    ctx.run_to_halt().unwrap();
    assert_eq!(ctx.retired(), 3);
    assert_eq!(ctx.cycles(), 13);
}

#[test]
fn policies_agree_when_nothing_stalls() {
    // Without dependencies the two policies schedule identically.
    let trace = || {
        TraceBuilder::new()
            .push(TraceInst::alu().dest(1))
            .push(TraceInst::alu().dest(2))
            .push(TraceInst::alu().dest(3))
            .build()
    };

    let mut in_order = TestContext::new(trace(), |c| {
        c.pipeline.rob_entries = 8;
        c.pipeline.sched_policy = SchedPolicy::InOrder;
    });
    let mut out_of_order = TestContext::new(trace(), |c| {
        c.pipeline.rob_entries = 8;
        c.pipeline.sched_policy = SchedPolicy::OutOfOrder;
    });

    in_order.run_to_halt().unwrap();
    out_of_order.run_to_halt().unwrap();
    assert_eq!(in_order.cycles(), out_of_order.cycles());
    assert_eq!(in_order.retired(), out_of_order.retired());
}
