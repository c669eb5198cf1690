// Copyright 2026 hesabla developers

//! Representation of the outcome of one timed benchmark run.

use std::time::Duration;

/// All the data from one run: the accumulated total and how long it took.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BenchOutcome {
    pub total: u128,
    pub elapsed: Duration,
}

impl BenchOutcome {
    /// The first output line: the accumulated total.
    pub fn total_line(&self) -> String {
        format!("Cəmi: {}", self.total)
    }

    /// The second output line: whole elapsed milliseconds.
    ///
    /// Timing varies by environment; only the shape of this line is fixed.
    pub fn time_line(&self) -> String {
        format!("Vaxt: {} ms", self.elapsed.as_millis())
    }
}
