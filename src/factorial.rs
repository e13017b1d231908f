// Copyright 2024 Martin Pool

//! Iterative factorial over 32-bit signed integers.

use tracing::{debug, trace};

use crate::error::FactorialError;
use crate::options::Overflow;

/// Compute `n!` by multiplying an accumulator by each of `1..=n`, wrapping on
/// overflow.
///
/// Values of `n` below 1 give 1, because the loop body never runs.
pub fn factorial(n: i32) -> i32 {
    let mut result: i32 = 1;
    for i in 1..=n {
        result = result.wrapping_mul(i);
        trace!(i, result);
        if result == 0 {
            // From 34! on the product has 32 factors of two; it stays 0.
            break;
        }
    }
    result
}

/// Compute `n!`, or None if any partial product overflows `i32`.
pub fn checked_factorial(n: i32) -> Option<i32> {
    (1..=n).try_fold(1i32, |result, i| result.checked_mul(i))
}

/// Compute the factorial of user input `n` under an overflow policy.
pub fn compute(n: i32, overflow: Overflow) -> Result<i32, FactorialError> {
    if n < 0 {
        debug!(n, "negative input");
        return Err(FactorialError::NegativeInput { n });
    }
    let result = match overflow {
        Overflow::Wrap => factorial(n),
        Overflow::Checked => checked_factorial(n).ok_or_else(|| {
            debug!(n, "factorial overflows i32");
            FactorialError::Overflow { n }
        })?,
    };
    debug!(n, result, ?overflow, "computed factorial");
    Ok(result)
}
