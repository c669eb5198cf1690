// Copyright 2026 hesabla developers

//! Exit codes from hesabla.

/// The run completed and the results were printed.
pub const SUCCESS: i32 = 0;

/// The wrong arguments, etc.
///
/// (1 is also the value returned by Clap.)
pub const USAGE: i32 = 1;
