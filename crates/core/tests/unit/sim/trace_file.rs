//! File-backed trace loading.

use std::io::Write;

use o3sim_core::common::SimError;
use o3sim_core::config::Config;
use o3sim_core::Simulator;
use tempfile::NamedTempFile;

use crate::common::builder::{TraceBuilder, TraceInst};

fn write_trace(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(bytes).expect("write trace");
    file.flush().expect("flush trace");
    file
}

#[test]
fn runs_a_trace_from_disk() {
    let trace = TraceBuilder::new()
        .push(TraceInst::alu().dest(1))
        .push(TraceInst::load().dest(2).src1(1))
        .push(TraceInst::store().src1(2))
        .build();
    let file = write_trace(&trace);

    let config = Config::default();
    let mut sim = Simulator::open(file.path(), &config).expect("open trace");
    sim.run().expect("clean drain");

    assert_eq!(sim.stats().instructions_retired, 3);
    assert!(sim.stats().cycles > 0);
}

#[test]
fn missing_trace_file_is_an_io_error() {
    let config = Config::default();
    match Simulator::open("/nonexistent/path.trace", &config) {
        Err(SimError::TraceIo(_)) => {}
        Err(other) => panic!("expected an I/O error, got {}", other),
        Ok(_) => panic!("open must fail for a missing file"),
    }
}

#[test]
fn truncated_file_drains_then_fails() {
    let trace = TraceBuilder::new()
        .push(TraceInst::alu().dest(1))
        .raw_bytes(&[1, 1])
        .build();
    let file = write_trace(&trace);

    let config = Config::default();
    let mut sim = Simulator::open(file.path(), &config).expect("open trace");
    match sim.run() {
        Err(SimError::TraceTruncated(2)) => {}
        other => panic!("expected truncation, got {:?}", other),
    }
    assert_eq!(sim.stats().instructions_retired, 1);
}
