//! Execution queue (EXEQ) for multi-cycle instructions.
//!
//! Instructions whose op class takes more than one cycle sit here with a
//! remaining-cycle counter while the execute stage ticks them down. The
//! queue is unordered; removal order is made deterministic by always
//! draining done entries smallest instruction number first.
//!
//! When every op class is single-cycle the execute stage bypasses this
//! structure entirely.

use std::fmt::{self, Write as _};

use crate::common::constants::MAX_WRITEBACKS;
use crate::core::pipeline::latches::InstInfo;

/// An instruction counting down its execution latency.
#[derive(Clone, Debug)]
struct ExeqEntry {
    inst: InstInfo,
    remaining: u32,
}

/// Bounded pool of currently-executing multi-cycle instructions.
pub struct Exeq {
    entries: Vec<ExeqEntry>,
}

impl Default for Exeq {
    fn default() -> Self {
        Self::new()
    }
}

impl Exeq {
    /// Creates an empty execution queue.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(MAX_WRITEBACKS),
        }
    }

    /// Returns the number of in-flight entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing is executing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds an instruction with the given latency.
    ///
    /// Returns false if the queue is at capacity; the caller treats that
    /// as a fatal configuration error.
    #[must_use]
    pub fn insert(&mut self, inst: InstInfo, latency: u32) -> bool {
        if self.entries.len() >= MAX_WRITEBACKS {
            return false;
        }
        self.entries.push(ExeqEntry {
            inst,
            remaining: latency,
        });
        true
    }

    /// Advances every entry by one cycle. Entries reaching zero remaining
    /// cycles become done but stay in the queue until removed.
    pub fn cycle(&mut self) {
        for entry in &mut self.entries {
            if entry.remaining > 0 {
                entry.remaining -= 1;
            }
        }
    }

    /// Returns true if at least one entry has finished executing.
    pub fn has_done(&self) -> bool {
        self.entries.iter().any(|e| e.remaining == 0)
    }

    /// Removes and returns one done entry.
    ///
    /// Among done entries the smallest instruction number is taken first,
    /// which keeps the simulation reproducible.
    pub fn remove_done(&mut self) -> Option<InstInfo> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.remaining == 0)
            .min_by_key(|(_, e)| e.inst.inst_num)
            .map(|(i, _)| i)?;
        Some(self.entries.swap_remove(idx).inst)
    }

    /// Renders the queue for the per-cycle state dump.
    pub fn render(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "EXEQ:")?;
        writeln!(out, "  inst   remaining")?;
        for entry in &self.entries {
            writeln!(out, "  {:>5}  {:>9}", entry.inst.inst_num, entry.remaining)?;
        }
        Ok(())
    }
}
