//! Pipeline engine.
//!
//! Owns the four latch arrays, the RAT, the ROB, the execution queue, and
//! the trace reader, and advances them one cycle at a time.
//!
//! Stages run in REVERSE pipeline order within a cycle — commit first,
//! fetch last. This ordering is what makes a cycle atomic: an instruction
//! moved into a latch by an upstream stage is not consumed downstream
//! until the next cycle, so nothing traverses two stages in one cycle.
//! The one downstream-to-upstream path, the wakeup broadcast, works the
//! other way on purpose: writeback runs before schedule, so a dependent
//! may be scheduled in the very cycle its producer writes back. Do not
//! reorder the calls.

pub mod exeq;
pub mod latches;
pub mod rat;
pub mod rob;
pub mod stages;

use std::fmt::Write as _;
use std::io::Read;

use crate::common::constants::MAX_WRITEBACKS;
use crate::common::SimError;
use crate::config::Config;
use crate::stats::SimStats;
use crate::trace::TraceReader;

use self::exeq::Exeq;
use self::latches::Latch;
use self::rat::Rat;
use self::rob::Rob;
use self::stages::{commit, decode, execute, fetch, issue, schedule, writeback};

/// The pipeline: datapath structures, latches, and run-control state.
pub struct Pipeline<R: Read> {
    /// Fetched instructions awaiting decode.
    pub fe_latch: Vec<Latch>,
    /// Decoded instructions awaiting issue.
    pub id_latch: Vec<Latch>,
    /// Scheduled instructions awaiting execute.
    pub sc_latch: Vec<Latch>,
    /// Finished instructions awaiting writeback. Wider than the other
    /// latches to absorb simultaneous multi-cycle completions.
    pub ex_latch: Vec<Latch>,
    /// Register alias table.
    pub rat: Rat,
    /// Re-order buffer.
    pub rob: Rob,
    /// Execution queue for multi-cycle instructions.
    pub exeq: Exeq,
    /// Cycle and retirement statistics.
    pub stats: SimStats,

    /// Trace record source.
    pub(crate) trace: TraceReader<R>,
    /// Lanes per stage.
    pub(crate) width: usize,
    /// Scheduling policy.
    pub(crate) sched_policy: crate::config::SchedPolicy,
    /// Load execution latency; 1 bypasses the execution queue.
    pub(crate) load_exe_cycles: u32,
    /// Last instruction number assigned at fetch.
    pub(crate) last_inst_num: u64,
    /// Next instruction number decode will emit.
    pub(crate) next_decode_num: u64,
    /// Instruction number whose retirement ends the run. `u64::MAX` until
    /// the end of the trace is observed.
    pub(crate) halt_inst_num: u64,
    /// Set once the run is over (clean drain or fatal overflow).
    pub(crate) halt: bool,
    /// First trace fault observed, surfaced after the drain.
    pub(crate) trace_error: Option<SimError>,
    /// Emit the per-cycle state dump to the log.
    dump_state: bool,
}

impl<R: Read> Pipeline<R> {
    /// Builds a pipeline over the given trace with the given configuration.
    pub fn new(trace: TraceReader<R>, config: &Config) -> Self {
        let width = config.pipeline.width;
        let lanes = |n: usize| {
            let mut v = Vec::with_capacity(n);
            v.resize_with(n, Latch::default);
            v
        };
        Self {
            fe_latch: lanes(width),
            id_latch: lanes(width),
            sc_latch: lanes(width),
            ex_latch: lanes(MAX_WRITEBACKS),
            rat: Rat::new(),
            rob: Rob::new(config.pipeline.rob_entries),
            exeq: Exeq::new(),
            stats: SimStats::default(),
            trace,
            width,
            sched_policy: config.pipeline.sched_policy,
            load_exe_cycles: config.pipeline.load_exe_cycles,
            last_inst_num: 0,
            next_decode_num: 1,
            halt_inst_num: u64::MAX,
            halt: false,
            trace_error: None,
            dump_state: config.general.trace_pipeline,
        }
    }

    /// True once the run is over.
    #[inline]
    pub fn halted(&self) -> bool {
        self.halt
    }

    /// Takes the first trace fault observed during fetch, if any.
    pub fn take_trace_error(&mut self) -> Option<SimError> {
        self.trace_error.take()
    }

    /// Simulates one cycle of every stage, in reverse pipeline order.
    pub fn cycle(&mut self) -> Result<(), SimError> {
        self.stats.cycles += 1;

        commit::commit_stage(self);
        writeback::writeback_stage(self);
        execute::execute_stage(self)?;
        schedule::schedule_stage(self);
        issue::issue_stage(self);
        decode::decode_stage(self);
        fetch::fetch_stage(self);

        if self.dump_state {
            log::debug!(
                "cycle {} retired {}\n{}",
                self.stats.cycles,
                self.stats.instructions_retired,
                self.render_state()
            );
        }
        Ok(())
    }

    /// Called by fetch when the trace ends (cleanly or on a fault): the
    /// retirement of the last fetched instruction becomes the halt target.
    pub(crate) fn end_of_trace(&mut self) {
        self.halt_inst_num = self.last_inst_num;
        if self.stats.instructions_retired >= self.halt_inst_num {
            self.halt = true;
        }
    }

    /// Renders the latch arrays and datapath structures for debugging.
    pub fn render_state(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, " FE:     ID:     SCH:    EX:    ");

        let mut ex_i = 0;
        for lane in 0..self.width {
            let cell = |latch: &Latch| {
                latch
                    .inst
                    .as_ref()
                    .map_or_else(|| " ------ ".to_string(), |i| format!(" {:6} ", i.inst_num))
            };
            let mut row = String::new();
            row.push_str(&cell(&self.fe_latch[lane]));
            row.push_str(&cell(&self.id_latch[lane]));
            row.push_str(&cell(&self.sc_latch[lane]));

            // EX is wider than the lane count; show the next occupied slot.
            let mut ex_cell = " ------ ".to_string();
            while ex_i < self.ex_latch.len() {
                if let Some(inst) = &self.ex_latch[ex_i].inst {
                    ex_cell = format!(" {:6} ", inst.inst_num);
                    ex_i += 1;
                    break;
                }
                ex_i += 1;
            }
            row.push_str(&ex_cell);
            let _ = writeln!(out, "{}", row);
        }
        let _ = writeln!(out);

        let _ = self.rat.render(&mut out);
        let _ = self.exeq.render(&mut out);
        let _ = self.rob.render(&mut out);
        out
    }
}
