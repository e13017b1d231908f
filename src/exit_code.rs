// Copyright 2024 Martin Pool

//! Exit codes from `factorial`.
//!
//! The first three match the program these samples reproduce, so scripts
//! written against it keep working.

/// The factorial was computed and printed.
pub const SUCCESS: i32 = 0;

/// No number was given, or the options could not be used.
///
/// (1 is also the value returned by Clap.)
pub const USAGE: i32 = 1;

/// The number was negative.
pub const NEGATIVE_INPUT: i32 = 2;

/// The factorial does not fit in 32 bits and overflow checking was requested.
pub const OVERFLOW: i32 = 3;
