// Copyright 2026 hesabla developers

//! Run the accumulation with wall-clock timestamps around it.

use std::time::Instant;

use humantime::format_duration;
use tracing::debug;

use crate::compute::{accumulate, ITERATIONS};
use crate::outcome::BenchOutcome;

/// Time one full accumulation run.
///
/// The timestamps bracket only the accumulation call, not argument parsing or
/// output, matching what the reported `Vaxt` line claims to measure.
pub fn run() -> BenchOutcome {
    let start = Instant::now();
    let total = accumulate(ITERATIONS);
    let elapsed = start.elapsed();
    debug!(
        "accumulated {total} over {ITERATIONS} iterations in {}",
        format_duration(elapsed)
    );
    BenchOutcome { total, elapsed }
}
