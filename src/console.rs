// Copyright 2026 hesabla developers

//! Trace output on stderr.
//!
//! Benchmark results go to stdout; everything else, including tracing, goes to
//! stderr so the two result lines stay machine-comparable.

use std::io;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::prelude::*;

/// Configure tracing to write to stderr at the given level.
pub fn setup_global_trace(level: Level) -> Result<()> {
    // Show time relative to the start of the program.
    let uptime = tracing_subscriber::fmt::time::uptime();
    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_timer(uptime)
        .with_filter(level_filter);
    tracing_subscriber::registry().with(stderr_layer).init();
    Ok(())
}
