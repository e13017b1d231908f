// Copyright 2024 Martin Pool

//! Command line arguments for `factorial`, and the options resolved from them
//! and the config file.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::config::Config;

/// Calculate the factorial of a non-negative integer.
///
/// The argument is read like C `atoi`: conversion stops at the first
/// non-digit, and text with no leading digits counts as 0.
#[derive(Parser, PartialEq, Debug)]
#[command(name = "factorial", author)]
pub struct Args {
    /// read options from this TOML file.
    #[arg(long, env = "FACTORIAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// log level for stderr (trace, debug, info, warn, error).
    #[arg(long, short = 'L', default_value = "warn", env = "FACTORIAL_TRACE_LEVEL")]
    pub level: tracing::Level,

    /// don't read any config file.
    #[arg(long)]
    pub no_config: bool,

    /// what to do when the factorial doesn't fit in 32 bits.
    #[arg(long, env = "FACTORIAL_OVERFLOW")]
    pub overflow: Option<Overflow>,

    /// show version and quit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub version: bool,

    /// the number whose factorial to calculate; later arguments are ignored.
    #[arg(value_name = "NUMBER", allow_hyphen_values = true)]
    pub numbers: Vec<OsString>,
}

impl Args {
    /// Parse the process's command line.
    pub fn try_parse_argv() -> Result<Args, clap::Error> {
        Args::try_parse_from_argv(std::env::args_os())
    }

    /// Parse a command line, starting with the program name.
    ///
    /// A `--` is data like any other hyphenated argument, so it can itself be
    /// the number. It's passed to clap after an escape so that clap keeps it.
    pub fn try_parse_from_argv<I, T>(argv: I) -> Result<Args, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut escaped = false;
        let mut rewritten = Vec::new();
        for arg in argv.into_iter().map(Into::into) {
            if !escaped && arg == "--" {
                escaped = true;
                rewritten.push(OsString::from("--"));
            }
            rewritten.push(arg);
        }
        Args::try_parse_from(rewritten)
    }

    /// The first positional argument, if any.
    pub fn number(&self) -> Option<&OsStr> {
        self.numbers.first().map(OsString::as_os_str)
    }
}

/// How to handle a factorial too large for a 32-bit signed integer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Wrap around silently, as C `int` arithmetic does in practice.
    #[default]
    Wrap,
    /// Report an error and exit 3.
    Checked,
}

/// Resolved options for one run.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub overflow: Overflow,
}

impl Options {
    /// Merge command line arguments over the config file over defaults.
    pub fn new(args: &Args, config: &Config) -> Options {
        Options {
            overflow: args.overflow.or(config.overflow).unwrap_or_default(),
        }
    }
}
