//! Architectural register index type.
//!
//! Operand register fields throughout the simulator are
//! `Option<ArchReg>`: `None` means "operand not needed", replacing the
//! ambiguous `-1` sentinel a hardware description would use.

use std::fmt;

use crate::common::constants::MAX_ARF_REGS;

/// Index of an architectural register, guaranteed in `[0, MAX_ARF_REGS)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArchReg(u8);

impl ArchReg {
    /// Creates a register index, returning `None` if out of range.
    pub fn new(idx: u8) -> Option<Self> {
        if (idx as usize) < MAX_ARF_REGS {
            Some(Self(idx))
        } else {
            None
        }
    }

    /// Returns the raw index for table lookups.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ArchReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}
