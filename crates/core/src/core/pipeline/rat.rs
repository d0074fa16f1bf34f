//! Register alias table (RAT).
//!
//! Maps each architectural register to the ROB tag of its latest in-flight
//! producer, or `None` if the latest value is already committed to the
//! architectural register file. Issue consults it to rename source
//! operands; commit clears an entry only when the retiring instruction is
//! still the latest producer of its destination.

use std::fmt::{self, Write as _};

use crate::common::constants::MAX_ARF_REGS;
use crate::common::ArchReg;
use crate::core::pipeline::rob::RobTag;

/// Register alias table: one slot per architectural register.
pub struct Rat {
    entries: [Option<RobTag>; MAX_ARF_REGS],
}

impl Default for Rat {
    fn default() -> Self {
        Self::new()
    }
}

impl Rat {
    /// Creates a RAT with every register unaliased (all values committed).
    pub fn new() -> Self {
        Self {
            entries: [None; MAX_ARF_REGS],
        }
    }

    /// Returns the ROB tag of the latest in-flight producer for a register,
    /// or `None` if the register value is in the architectural file.
    #[inline]
    pub fn get_producer(&self, reg: ArchReg) -> Option<RobTag> {
        self.entries[reg.index()]
    }

    /// Marks a register as produced by the given ROB entry, replacing any
    /// older alias.
    #[inline]
    pub fn set_producer(&mut self, reg: ArchReg, tag: RobTag) {
        self.entries[reg.index()] = Some(tag);
    }

    /// Clears a register's alias, but ONLY if the current tag matches.
    ///
    /// A committing instruction must not clear an alias set by a younger
    /// instruction writing the same register (WAW handling).
    pub fn clear_if_match(&mut self, reg: ArchReg, tag: RobTag) {
        let slot = &mut self.entries[reg.index()];
        if *slot == Some(tag) {
            *slot = None;
        }
    }

    /// Renders the aliased entries for the per-cycle state dump.
    pub fn render(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "RAT:")?;
        writeln!(out, "  reg    tag")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if let Some(tag) = entry {
                writeln!(out, "  r{:<4} {:>5}", i, tag.index())?;
            }
        }
        Ok(())
    }
}
