//! Re-order buffer (ROB) for in-order commit.
//!
//! The ROB is a circular buffer that tracks in-flight instructions from
//! issue through commit. It provides:
//! 1. **Allocation:** Assigns a slot (and therefore a rename tag) to each
//!    instruction entering the backend.
//! 2. **Scheduling state:** Per-slot `exec` and `ready` flags with the
//!    lifecycle invalid -> allocated -> executing -> ready -> retired.
//! 3. **Wakeup:** Broadcasts a completing producer's tag so dependent
//!    source operands flip to ready.
//! 4. **In-order commit:** Retires instructions from the head in program
//!    order.
//!
//! The buffer carries an explicit occupancy count alongside `head` and
//! `tail`, which keeps empty and full (`head == tail` in both cases)
//! trivially distinguishable and makes whole-buffer traversals plain
//! counted loops.

use std::fmt::{self, Write as _};

use crate::core::pipeline::latches::InstInfo;

/// Tag naming an in-flight instruction: the index of its ROB slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RobTag(pub usize);

impl RobTag {
    /// Returns the slot index this tag names.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single slot in the re-order buffer.
#[derive(Clone, Debug, Default)]
pub struct RobSlot {
    /// Whether this slot holds an in-flight instruction.
    pub valid: bool,
    /// Whether the instruction has been sent to execution.
    pub exec: bool,
    /// Whether the instruction's result is available (ready to commit).
    pub ready: bool,
    /// The instruction this slot holds.
    pub inst: InstInfo,
}

/// Re-order buffer — circular buffer for in-order commit.
pub struct Rob {
    /// Fixed-size slot array.
    slots: Vec<RobSlot>,
    /// Index of the oldest entry (commit point).
    head: usize,
    /// Index where the next entry will be allocated.
    tail: usize,
    /// Number of occupied slots.
    count: usize,
}

impl Rob {
    /// Creates a new ROB with the given capacity.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, RobSlot::default);
        Self {
            slots,
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Returns the ROB capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the ROB is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the ROB is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// Returns true if another instruction can be inserted.
    #[inline]
    pub fn has_space(&self) -> bool {
        !self.is_full()
    }

    /// Inserts an instruction at the tail.
    ///
    /// The slot index becomes the instruction's rename tag and is written
    /// into its `dest_tag` before the slot is filled. When the buffer is
    /// full the instruction is handed back so the caller can keep it
    /// latched.
    pub fn allocate(&mut self, mut inst: InstInfo) -> Result<RobTag, InstInfo> {
        if self.is_full() {
            return Err(inst);
        }

        let tag = RobTag(self.tail);
        inst.dest_tag = Some(tag);
        self.slots[self.tail] = RobSlot {
            valid: true,
            exec: false,
            ready: false,
            inst,
        };
        self.tail = (self.tail + 1) % self.slots.len();
        self.count += 1;
        Ok(tag)
    }

    /// Marks the instruction at `tag` as sent to execution.
    pub fn mark_exec(&mut self, tag: RobTag) {
        let slot = &mut self.slots[tag.index()];
        debug_assert!(slot.valid && !slot.exec, "scheduling an invalid or executing slot");
        slot.exec = true;
    }

    /// Marks the instruction at `tag` as having its result available.
    pub fn mark_ready(&mut self, tag: RobTag) {
        let slot = &mut self.slots[tag.index()];
        debug_assert!(slot.valid && slot.exec, "writeback to an invalid or unscheduled slot");
        slot.ready = true;
    }

    /// Returns true if the slot at `tag` is occupied and its result is
    /// available.
    #[inline]
    pub fn is_ready(&self, tag: RobTag) -> bool {
        let slot = &self.slots[tag.index()];
        slot.valid && slot.ready
    }

    /// Returns true if the head instruction is ready to commit.
    #[inline]
    pub fn head_ready(&self) -> bool {
        self.is_ready(RobTag(self.head))
    }

    /// Broadcasts a completing producer's tag to every occupied slot,
    /// flipping matching source operands to ready.
    ///
    /// The traversal is a counted walk from head to tail, so a completely
    /// full buffer is covered exactly once.
    pub fn wakeup(&mut self, tag: RobTag) {
        let cap = self.slots.len();
        for k in 0..self.count {
            let slot = &mut self.slots[(self.head + k) % cap];
            if !slot.valid {
                continue;
            }
            if slot.inst.src1_tag == Some(tag) {
                slot.inst.src1_ready = true;
            }
            if slot.inst.src2_tag == Some(tag) {
                slot.inst.src2_ready = true;
            }
        }
    }

    /// Retires the head instruction.
    ///
    /// Returns `None` if the buffer is empty or the head is not yet ready;
    /// otherwise invalidates the head slot, advances the head pointer, and
    /// returns the instruction that was there.
    pub fn commit_head(&mut self) -> Option<InstInfo> {
        if !self.head_ready() {
            return None;
        }

        let slot = &mut self.slots[self.head];
        slot.valid = false;
        slot.exec = false;
        slot.ready = false;
        let inst = std::mem::take(&mut slot.inst);
        self.head = (self.head + 1) % self.slots.len();
        self.count -= 1;
        Some(inst)
    }

    /// Returns the slot a tag names.
    #[inline]
    pub fn slot(&self, tag: RobTag) -> &RobSlot {
        &self.slots[tag.index()]
    }

    /// Visits every occupied slot in program order (head to tail).
    pub fn slots_in_order(&self) -> impl Iterator<Item = (RobTag, &RobSlot)> {
        let cap = self.slots.len();
        (0..self.count).map(move |k| {
            let idx = (self.head + k) % cap;
            (RobTag(idx), &self.slots[idx])
        })
    }

    /// Renders the buffer for the per-cycle state dump.
    pub fn render(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "ROB:")?;
        writeln!(
            out,
            "  slot   inst  valid exec ready  src1            src2            dest"
        )?;
        for (idx, slot) in self.slots.iter().enumerate() {
            let marker = match (idx == self.head, idx == self.tail) {
                (true, true) => " (head/tail)",
                (true, false) => " (head)",
                (false, true) => " (tail)",
                (false, false) => "",
            };
            let src = |reg: Option<crate::common::ArchReg>,
                       tag: Option<RobTag>,
                       ready: bool| {
                match reg {
                    None => "--".to_string(),
                    Some(r) => {
                        let t = tag.map_or("arf".to_string(), |t| format!("#{}", t.index()));
                        format!("{}:{}{}", r, t, if ready { "+" } else { "-" })
                    }
                }
            };
            writeln!(
                out,
                "  {:>4} {:>6}  {:>5} {:>4} {:>5}  {:<15} {:<15} {}{}",
                idx,
                slot.inst.inst_num,
                slot.valid,
                slot.exec,
                slot.ready,
                src(slot.inst.src1_reg, slot.inst.src1_tag, slot.inst.src1_ready),
                src(slot.inst.src2_reg, slot.inst.src2_tag, slot.inst.src2_ready),
                slot.inst
                    .dest_reg
                    .map_or("--".to_string(), |r| r.to_string()),
                marker
            )?;
        }
        Ok(())
    }
}
