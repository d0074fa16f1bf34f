//! Fluent builders for composing binary instruction traces.

use o3sim_core::trace::TRACE_REC_SIZE;

/// One trace instruction under construction.
#[derive(Clone, Copy)]
pub struct TraceInst {
    op: u8,
    dest: Option<u8>,
    src1: Option<u8>,
    src2: Option<u8>,
}

impl TraceInst {
    fn new(op: u8) -> Self {
        Self {
            op,
            dest: None,
            src1: None,
            src2: None,
        }
    }

    /// An ALU instruction.
    pub fn alu() -> Self {
        Self::new(0)
    }

    /// A load instruction (the only multi-cycle class).
    pub fn load() -> Self {
        Self::new(1)
    }

    /// A store instruction.
    pub fn store() -> Self {
        Self::new(2)
    }

    /// A conditional branch.
    pub fn branch() -> Self {
        Self::new(3)
    }

    /// An instruction of any other class.
    pub fn other() -> Self {
        Self::new(4)
    }

    /// An instruction with a raw (possibly invalid) op byte.
    pub fn raw_op(op: u8) -> Self {
        Self::new(op)
    }

    /// Sets the destination register.
    pub fn dest(mut self, reg: u8) -> Self {
        self.dest = Some(reg);
        self
    }

    /// Sets the first source register.
    pub fn src1(mut self, reg: u8) -> Self {
        self.src1 = Some(reg);
        self
    }

    /// Sets the second source register.
    pub fn src2(mut self, reg: u8) -> Self {
        self.src2 = Some(reg);
        self
    }

    /// Encodes the record in the trace wire format.
    pub fn encode(self) -> [u8; TRACE_REC_SIZE] {
        let field = |r: Option<u8>| r.map_or((0u8, 0u8), |reg| (1, reg));
        let (dn, dr) = field(self.dest);
        let (s1n, s1r) = field(self.src1);
        let (s2n, s2r) = field(self.src2);
        [self.op, dn, dr, s1n, s1r, s2n, s2r]
    }
}

/// Accumulates encoded records into a trace byte stream.
#[derive(Default)]
pub struct TraceBuilder {
    bytes: Vec<u8>,
}

impl TraceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one instruction.
    pub fn push(mut self, inst: TraceInst) -> Self {
        self.bytes.extend_from_slice(&inst.encode());
        self
    }

    /// Appends raw bytes, for malformed-trace tests.
    pub fn raw_bytes(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Finishes the trace.
    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
