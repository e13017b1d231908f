// Copyright 2024 Martin Pool

//! Errors that stop `factorial` before it prints a result.

use std::error::Error;
use std::fmt;

use crate::exit_code;

/// A terminal, user-visible failure of the factorial utility.
///
/// The `Display` form is the exact diagnostic line printed on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorialError {
    /// No number was given on the command line.
    MissingArgument {
        /// argv\[0\], as invoked.
        program: String,
    },
    /// The number was negative.
    NegativeInput { n: i32 },
    /// The factorial overflowed 32 bits under the checked overflow policy.
    Overflow { n: i32 },
}

impl FactorialError {
    pub fn exit_code(&self) -> i32 {
        match self {
            FactorialError::MissingArgument { .. } => exit_code::USAGE,
            FactorialError::NegativeInput { .. } => exit_code::NEGATIVE_INPUT,
            FactorialError::Overflow { .. } => exit_code::OVERFLOW,
        }
    }
}

impl fmt::Display for FactorialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorialError::MissingArgument { program } => {
                write!(f, "Usage: {program} <number>")
            }
            FactorialError::NegativeInput { .. } => {
                write!(f, "Error: Cannot calculate factorial of a negative number.")
            }
            FactorialError::Overflow { n } => {
                write!(f, "Error: Factorial of {n} overflows a 32-bit integer.")
            }
        }
    }
}

impl Error for FactorialError {}
