// Copyright 2024 Martin Pool

#![allow(dead_code)] // rustc doesn't understand they're used by multiple crates

//! Reusable utilities for the CLI tests.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use lazy_static::lazy_static;

/// A timeout for one invocation from the test suite, so that a hang fails
/// the test rather than the whole run.
pub const OUTER_TIMEOUT: Duration = Duration::from_secs(60);

lazy_static! {
    pub static ref FACTORIAL_BINARY: PathBuf = assert_cmd::cargo::cargo_bin("factorial");
    pub static ref POINTER_ALIAS_BINARY: PathBuf = assert_cmd::cargo::cargo_bin("pointer_alias");
}

/// A command running `factorial`, isolated from the caller's environment.
pub fn run_factorial() -> assert_cmd::Command {
    hermetic(assert_cmd::Command::new(FACTORIAL_BINARY.as_os_str()))
}

/// A command running `pointer_alias`, isolated from the caller's environment.
pub fn run_pointer_alias() -> assert_cmd::Command {
    hermetic(assert_cmd::Command::new(POINTER_ALIAS_BINARY.as_os_str()))
}

// Strip any settings configured in the environment running these tests, so
// that they don't change the behavior of the code under test.
fn hermetic(mut cmd: assert_cmd::Command) -> assert_cmd::Command {
    env::vars()
        .map(|(k, _v)| k)
        .filter(|k| k.starts_with("FACTORIAL_") || k.starts_with("POINTER_ALIAS_"))
        .for_each(|k| {
            cmd.env_remove(k);
        });
    cmd.timeout(OUTER_TIMEOUT);
    cmd
}
