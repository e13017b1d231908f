// Copyright 2024 Martin Pool

//! Two small sample programs sharing one library: `factorial`, which computes
//! the factorial of its argument, and `pointer_alias`, which writes through
//! one of two aliased references and exits with the sum of both reads.

pub mod alias;
pub mod atoi;
pub mod config;
pub mod console;
pub mod error;
pub mod exit_code;
pub mod factorial;
pub mod options;

pub use anyhow::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
