// Copyright 2024 Martin Pool

//! `pointer_alias`: exit with `*p + *q` after reseating `p` onto `q`'s target
//! and writing 200 through it.
//!
//! The status is 400, which Unix truncates to 144.

use std::env;
use std::process::exit;

use anyhow::Result;
use tracing::debug;

use c_samples::alias::aliased_sum;
use c_samples::console;

fn main() -> Result<()> {
    let level = env::var("POINTER_ALIAS_TRACE_LEVEL").ok();
    console::setup_global_trace(console::level_from_env(level.as_deref()))?;
    let status = aliased_sum();
    debug!(status, "exiting");
    exit(status);
}
