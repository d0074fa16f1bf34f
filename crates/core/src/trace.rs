//! Binary trace record reader.
//!
//! A trace is a stream of fixed-size records, one per decoded instruction.
//! Each record is 7 bytes:
//!
//! | offset | field        | meaning                               |
//! |--------|--------------|---------------------------------------|
//! | 0      | op_type      | instruction class, `< NUM_OP_TYPES`   |
//! | 1      | dest_needed  | nonzero if the instruction writes     |
//! | 2      | dest_reg     | destination register, `< MAX_ARF_REGS`|
//! | 3      | src1_needed  | nonzero if source 1 is read           |
//! | 4      | src1_reg     | source register 1                     |
//! | 5      | src2_needed  | nonzero if source 2 is read           |
//! | 6      | src2_reg     | source register 2                     |
//!
//! Register fields are ignored when the matching `needed` byte is zero.
//! The reader retries short reads until a record is complete (pipes may
//! deliver partial records), treats EOF at a record boundary as a clean
//! end of trace, and reports anything else as a trace fault.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::common::{ArchReg, SimError};
use crate::isa::OpType;

/// Size of one encoded trace record in bytes.
pub const TRACE_REC_SIZE: usize = 7;

/// One decoded trace record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Instruction class.
    pub op: OpType,
    /// Destination register, if the instruction writes one.
    pub dest_reg: Option<ArchReg>,
    /// First source register, if read.
    pub src1_reg: Option<ArchReg>,
    /// Second source register, if read.
    pub src2_reg: Option<ArchReg>,
}

impl TraceRecord {
    /// Decodes a raw record buffer, validating every field.
    fn decode(buf: &[u8; TRACE_REC_SIZE]) -> Result<Self, SimError> {
        let op = OpType::from_trace(buf[0]).ok_or(SimError::TraceBadOp(buf[0]))?;
        let reg = |needed: u8, raw: u8| -> Result<Option<ArchReg>, SimError> {
            if needed == 0 {
                return Ok(None);
            }
            ArchReg::new(raw).map(Some).ok_or(SimError::TraceBadReg(raw))
        };
        Ok(Self {
            op,
            dest_reg: reg(buf[1], buf[2])?,
            src1_reg: reg(buf[3], buf[4])?,
            src2_reg: reg(buf[5], buf[6])?,
        })
    }
}

/// Streaming reader over an opaque byte source.
///
/// After EOF or any error the reader is fused: subsequent calls return
/// `Ok(None)` so the pipeline can drain without re-reporting the fault.
pub struct TraceReader<R: Read> {
    source: R,
    finished: bool,
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> TraceReader<R> {
    /// Wraps an arbitrary byte source.
    pub fn new(source: R) -> Self {
        Self {
            source,
            finished: false,
        }
    }

    /// Reads the next record.
    ///
    /// Returns `Ok(Some(record))` for a complete, valid record,
    /// `Ok(None)` at a clean end of trace, and an error for a short read,
    /// an I/O failure, or an out-of-range field.
    pub fn next_record(&mut self) -> Result<Option<TraceRecord>, SimError> {
        if self.finished {
            return Ok(None);
        }

        let mut buf = [0u8; TRACE_REC_SIZE];
        let mut filled = 0;
        while filled < TRACE_REC_SIZE {
            match self.source.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Err(SimError::TraceIo(e));
                }
            }
        }

        if filled == 0 {
            self.finished = true;
            return Ok(None);
        }
        if filled < TRACE_REC_SIZE {
            self.finished = true;
            return Err(SimError::TraceTruncated(filled));
        }

        match TraceRecord::decode(&buf) {
            Ok(rec) => Ok(Some(rec)),
            Err(e) => {
                self.finished = true;
                Err(e)
            }
        }
    }
}
