// Copyright 2024 Martin Pool

//! Write through one of two references after reseating it onto the other's
//! target, and observe the write through both.
//!
//! Each integer lives in a [Cell], so several shared references can denote
//! the same slot and still write to it. Reseating a reference changes which
//! slot it observes, never the slots themselves.

use std::cell::Cell;
use std::ptr;

use tracing::debug;

/// Initial value of the first slot.
pub const FIRST: i32 = 42;

/// Initial value of the second slot.
pub const SECOND: i32 = 100;

/// Value written through the reseated reference.
pub const WRITTEN: i32 = 200;

/// What can be observed after the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasOutcome {
    /// Final value of the first slot.
    pub first: i32,
    /// Final value of the second slot.
    pub second: i32,
    /// Value read through the reseated reference `p`.
    pub through_p: i32,
    /// Value read through `q`, which was never reseated.
    pub through_q: i32,
    /// True if `p` and `q` denote the same slot.
    pub aliased: bool,
}

impl AliasOutcome {
    /// The sum of the reads through both references.
    pub fn sum(&self) -> i32 {
        self.through_p.wrapping_add(self.through_q)
    }
}

/// Point `p` at a slot holding `first` and `q` at one holding `second`, then
/// reseat `p` onto `q`'s slot and write `written` through `p`.
pub fn alias_and_write(first: i32, second: i32, written: i32) -> AliasOutcome {
    let x = Cell::new(first);
    let y = Cell::new(second);
    let mut p = &x;
    let q = &y;
    debug!(p = p.get(), q = q.get(), "before reseating");
    p = q;
    p.set(written);
    let outcome = AliasOutcome {
        first: x.get(),
        second: y.get(),
        through_p: p.get(),
        through_q: q.get(),
        aliased: ptr::eq(p, q),
    };
    debug!(?outcome, "after write");
    outcome
}

/// The sum `*p + *q` for the fixed starting values: 400.
pub fn aliased_sum() -> i32 {
    alias_and_write(FIRST, SECOND, WRITTEN).sum()
}
