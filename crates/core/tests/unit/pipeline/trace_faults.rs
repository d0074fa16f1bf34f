//! Trace fault handling.
//!
//! A fault while fetching ends the trace but not the run: everything
//! fetched before the fault drains through the pipeline and retires, and
//! only then is the error surfaced to the caller.

use o3sim_core::common::SimError;

use crate::common::builder::{TraceBuilder, TraceInst};
use crate::common::harness::TestContext;

#[test]
fn truncated_trace_drains_then_reports() {
    let trace = TraceBuilder::new()
        .push(TraceInst::alu().dest(1))
        .push(TraceInst::alu().src1(1))
        .raw_bytes(&[0, 1, 2]) // partial third record
        .build();
    let mut ctx = TestContext::scalar(trace);

    match ctx.run_to_halt() {
        Err(SimError::TraceTruncated(3)) => {}
        other => panic!("expected truncation fault, got {:?}", other),
    }
    assert_eq!(ctx.retired(), 2, "complete records must still retire");
}

#[test]
fn unknown_op_drains_then_reports() {
    let trace = TraceBuilder::new()
        .push(TraceInst::alu().dest(1))
        .push(TraceInst::raw_op(7))
        .build();
    let mut ctx = TestContext::scalar(trace);

    match ctx.run_to_halt() {
        Err(SimError::TraceBadOp(7)) => {}
        other => panic!("expected bad-op fault, got {:?}", other),
    }
    assert_eq!(ctx.retired(), 1);
}

#[test]
fn out_of_range_register_drains_then_reports() {
    let trace = TraceBuilder::new()
        .push(TraceInst::alu().dest(1))
        .push(TraceInst::alu().dest(99))
        .build();
    let mut ctx = TestContext::scalar(trace);

    match ctx.run_to_halt() {
        Err(SimError::TraceBadReg(99)) => {}
        other => panic!("expected bad-reg fault, got {:?}", other),
    }
    assert_eq!(ctx.retired(), 1);
}

#[test]
fn clean_trace_reports_no_error() {
    let trace = TraceBuilder::new()
        .push(TraceInst::alu().dest(1))
        .push(TraceInst::store().src1(1))
        .build();
    let mut ctx = TestContext::scalar(trace);
    ctx.run_to_halt().unwrap();
    assert_eq!(ctx.retired(), 2);
}
