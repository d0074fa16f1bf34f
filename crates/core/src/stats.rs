//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It
//! provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived
//!    metrics (IPC, CPI, host-side simulation speed).
//! 2. **Instruction mix:** Retired counts by op class.

use std::time::Instant;

use crate::isa::OpType;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions committed (retired).
    pub instructions_retired: u64,

    /// Count of ALU instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branch instructions retired.
    pub inst_branch: u64,
    /// Count of other instructions retired.
    pub inst_other: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_other: 0,
        }
    }
}

impl SimStats {
    /// Counts one retired instruction of the given class.
    pub fn record_retired(&mut self, op: OpType) {
        self.instructions_retired += 1;
        match op {
            OpType::Alu => self.inst_alu += 1,
            OpType::Load => self.inst_load += 1,
            OpType::Store => self.inst_store += 1,
            OpType::CondBranch => self.inst_branch += 1,
            OpType::Other => self.inst_other += 1,
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"` or
    /// `"instruction_mix"`. Pass an empty slice to print all sections
    /// (same as `print()`).
    ///
    /// Division by zero is prevented by clamping cycle and instruction
    /// counts to at least 1 before any division.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let instr = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        };

        if want("summary") {
            let ipc = self.instructions_retired as f64 / cyc as f64;
            let cpi = cyc as f64 / instr as f64;
            let khz = (self.cycles as f64 / seconds) / 1000.0;
            println!("\n==========================================================");
            println!("PIPELINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {:.4} s", seconds);
            println!("sim_cycles               {}", self.cycles);
            println!("sim_freq                 {:.2} kHz", khz);
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_ipc                  {:.4}", ipc);
            println!("sim_cpi                  {:.4}", cpi);
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let total = instr as f64;
            let row = |name: &str, count: u64| {
                println!(
                    "  op.{:<20} {} ({:.2}%)",
                    name,
                    count,
                    (count as f64 / total) * 100.0
                );
            };
            println!("INSTRUCTION MIX");
            row("alu", self.inst_alu);
            row("load", self.inst_load);
            row("store", self.inst_store);
            row("branch", self.inst_branch);
            row("other", self.inst_other);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
