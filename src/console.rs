// Copyright 2024 Martin Pool

//! Trace output on the terminal.
//!
//! Stdout carries only each program's result, so all tracing goes to stderr.

use std::io;
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::prelude::*;

use crate::Result;

/// The trace level used when none is configured.
pub const DEFAULT_LEVEL: Level = Level::WARN;

/// Install a global subscriber printing events at `level` and above to stderr.
pub fn setup_global_trace(level: Level) -> Result<()> {
    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(level_filter);
    tracing_subscriber::registry().with(console_layer).try_init()?;
    Ok(())
}

/// Parse a trace level from an environment variable value, falling back to
/// [DEFAULT_LEVEL] if it's unset or not a level name.
pub fn level_from_env(value: Option<&str>) -> Level {
    value
        .and_then(|v| Level::from_str(v.trim()).ok())
        .unwrap_or(DEFAULT_LEVEL)
}
