//! Simulation error definitions.
//!
//! This module defines the error taxonomy for the simulator:
//! 1. **Trace faults:** I/O failures, truncated records, and out-of-range
//!    fields. These are recoverable — the pipeline drains the instructions
//!    it already fetched, and the run exits nonzero afterwards.
//! 2. **Structural overflows:** The execution queue filling up. Fatal; a
//!    correctly configured pipeline can never reach this state.

use std::fmt;
use std::io;

/// Errors produced while reading the trace or cycling the pipeline.
#[derive(Debug)]
pub enum SimError {
    /// The trace source failed mid-record.
    ///
    /// The associated value is the underlying I/O error.
    TraceIo(io::Error),

    /// The trace ended in the middle of a record.
    ///
    /// The associated value is the number of bytes of the partial record.
    TraceTruncated(usize),

    /// A trace record carried an op type outside the known enumeration.
    ///
    /// The associated value is the raw op byte.
    TraceBadOp(u8),

    /// A trace record named a register outside the architectural file.
    ///
    /// The associated value is the raw register byte.
    TraceBadReg(u8),

    /// The execution queue was full when the execute stage tried to insert.
    ///
    /// Reaching this state indicates a configuration bug; the simulation
    /// stops immediately.
    ExeqOverflow,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::TraceIo(e) => write!(f, "couldn't read from trace: {}", e),
            SimError::TraceTruncated(n) => {
                write!(f, "invalid trace file: truncated record ({} bytes)", n)
            }
            SimError::TraceBadOp(op) => {
                write!(f, "invalid trace file: unknown op type {}", op)
            }
            SimError::TraceBadReg(reg) => {
                write!(f, "invalid trace file: register {} out of range", reg)
            }
            SimError::ExeqOverflow => write!(f, "execution queue full"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::TraceIo(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SimError {
    fn from(e: io::Error) -> Self {
        SimError::TraceIo(e)
    }
}
