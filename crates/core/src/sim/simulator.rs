//! Simulator: owns the pipeline and runs it to completion.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::common::SimError;
use crate::config::Config;
use crate::core::pipeline::Pipeline;
use crate::stats::SimStats;
use crate::trace::TraceReader;

/// Top-level simulation driver.
pub struct Simulator<R: Read> {
    /// The pipeline under simulation.
    pub pipeline: Pipeline<R>,
}

impl Simulator<BufReader<File>> {
    /// Opens a trace file and builds a simulator over it.
    pub fn open<P: AsRef<Path>>(path: P, config: &Config) -> Result<Self, SimError> {
        Ok(Self::new(TraceReader::open(path)?, config))
    }
}

impl<R: Read> Simulator<R> {
    /// Builds a simulator over an already-constructed trace reader.
    pub fn new(trace: TraceReader<R>, config: &Config) -> Self {
        Self {
            pipeline: Pipeline::new(trace, config),
        }
    }

    /// Builds a simulator over an arbitrary byte source.
    pub fn from_reader(source: R, config: &Config) -> Self {
        Self::new(TraceReader::new(source), config)
    }

    /// Advances the simulation by one clock cycle.
    pub fn tick(&mut self) -> Result<(), SimError> {
        self.pipeline.cycle()
    }

    /// Runs the pipeline until it halts.
    ///
    /// A structural overflow aborts immediately. A trace fault lets the
    /// pipeline drain every instruction fetched before the fault, then
    /// surfaces as the run's error so callers exit nonzero.
    pub fn run(&mut self) -> Result<(), SimError> {
        while !self.pipeline.halted() {
            self.pipeline.cycle()?;
        }
        match self.pipeline.take_trace_error() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// The statistics gathered so far.
    pub fn stats(&self) -> &SimStats {
        &self.pipeline.stats
    }
}
