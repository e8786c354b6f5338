//! Simulation statistics collection and reporting.
//!
//! This module tracks per-run counters for the pipeline. It provides:
//! 1. **Throughput:** Total cycles, retired instructions, and derived CPI/IPC.
//! 2. **Pipeline activity:** Instructions fetched and decoded, flushes and squashed slots.
//! 3. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 4. **Control flow:** Taken and not-taken `BEQZ` outcomes.

use std::time::Instant;

/// Simulation statistics tracked across a run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles elapsed.
    pub cycles: u64,
    /// Instructions placed into IF/ID.
    pub instructions_fetched: u64,
    /// Instructions placed into ID/EX.
    pub instructions_decoded: u64,
    /// Instructions that completed the execute stage.
    pub instructions_retired: u64,

    /// ALU instructions retired (`ADD`..`SRC`, `LDI`).
    pub inst_alu: u64,
    /// `LB` instructions retired.
    pub inst_load: u64,
    /// `SB` instructions retired.
    pub inst_store: u64,
    /// `BEQZ` instructions retired.
    pub inst_branch: u64,
    /// `JR` instructions retired.
    pub inst_jump: u64,

    /// `BEQZ` instructions whose register was zero.
    pub branches_taken: u64,
    /// Cycles in which the pipeline was flushed.
    pub flushes: u64,
    /// In-flight instructions discarded by flushes.
    pub squashed: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_fetched: 0,
            instructions_decoded: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            branches_taken: 0,
            flushes: 0,
            squashed: 0,
        }
    }
}

impl SimStats {
    /// `BEQZ` instructions that fell through.
    pub const fn branches_not_taken(&self) -> u64 {
        self.inst_branch.saturating_sub(self.branches_taken)
    }

    /// Cycles per retired instruction, or `0.0` before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints all statistics to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64, of: f64| (n as f64 / of) * 100.0;

        println!("\n==========================================================");
        println!("PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", self.instructions_retired as f64 / cyc);
        println!("sim_cpi                  {:.4}", self.cpi());
        println!("----------------------------------------------------------");
        println!("PIPELINE");
        println!("  fetched                {}", self.instructions_fetched);
        println!("  decoded                {}", self.instructions_decoded);
        println!(
            "  flushes                {} ({:.2}% of cycles)",
            self.flushes,
            pct(self.flushes, cyc)
        );
        println!("  squashed               {}", self.squashed);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu, instr));
        println!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load, instr));
        println!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store, instr));
        println!("  op.branch              {} ({:.2}%)", self.inst_branch, pct(self.inst_branch, instr));
        println!("  op.jump                {} ({:.2}%)", self.inst_jump, pct(self.inst_jump, instr));
        println!("----------------------------------------------------------");
        println!("CONTROL FLOW");
        println!("  branch.taken           {}", self.branches_taken);
        println!("  branch.not_taken       {}", self.branches_not_taken());
        println!("==========================================================");
    }
}
