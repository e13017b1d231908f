// Copyright 2024 Martin Pool

//! Optional TOML configuration file for `factorial`.
//!
//! The file is named by `--config` or `$FACTORIAL_CONFIG`, and merged into
//! the [Options](crate::options::Options) under any command line arguments.

use std::fs::read_to_string;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use crate::options::{Args, Overflow};
use crate::Result;

/// Configuration read from a config file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Overflow policy, if not given on the command line.
    pub overflow: Option<Overflow>,
}

impl Config {
    pub fn read_file(path: &Path) -> Result<Config> {
        let toml = read_to_string(path).with_context(|| format!("read config {path:?}"))?;
        toml::de::from_str(&toml).with_context(|| format!("parse toml from {path:?}"))
    }

    /// Read the config file named by the arguments, or return a default (empty)
    /// config if there is none or `--no-config` was given.
    pub fn for_args(args: &Args) -> Result<Config> {
        match &args.config {
            Some(path) if !args.no_config => {
                let config = Config::read_file(path)?;
                debug!(?path, ?config, "read config");
                Ok(config)
            }
            _ => Ok(Config::default()),
        }
    }
}
