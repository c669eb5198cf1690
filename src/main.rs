// Copyright 2026 hesabla developers

//! `hesabla`: compute a fixed factorial-accumulation sum and report how long it took.

mod bench;
mod compute;
mod console;
mod exit_code;
mod outcome;

use std::process::exit;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::outcome::BenchOutcome;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

/// Compute the sum of (15! + i) for i in 1..=5,000,000 and report the elapsed time.
///
/// The factorial is deliberately recomputed on every iteration: the redundant
/// work is the whole point of the benchmark.
#[derive(Parser, PartialEq, Debug)]
#[command(author, about)]
struct Args {
    /// log level for stderr (trace, debug, info, warn, error).
    #[arg(long, short = 'L', default_value = "warn")]
    level: tracing::Level,

    /// show version and quit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    version: bool,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            exit(exit_code::USAGE);
        }
    };
    console::setup_global_trace(args.level)?;

    if args.version {
        println!("{NAME} {VERSION}");
        return Ok(());
    }

    debug!(
        iterations = compute::ITERATIONS,
        factorial_input = compute::FACTORIAL_INPUT,
        "starting accumulation"
    );
    let outcome: BenchOutcome = bench::run();
    println!("{}", outcome.total_line());
    println!("{}", outcome.time_line());
    exit(exit_code::SUCCESS);
}
