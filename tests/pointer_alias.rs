// Copyright 2024 Martin Pool

//! Tests for the `pointer_alias` program.

use predicates::prelude::*;

mod util;
use util::run_pointer_alias;

#[cfg(unix)]
#[test]
fn exit_status_is_low_byte_of_sum() {
    // 200 + 200 = 400, and Unix keeps only the low 8 bits.
    run_pointer_alias().assert().code(144).stdout("").stderr("");
}

#[cfg(unix)]
#[test]
fn arguments_are_ignored() {
    run_pointer_alias()
        .args(["1", "2", "--whatever"])
        .assert()
        .code(144)
        .stdout("");
}

#[test]
fn debug_trace_shows_the_aliased_write() {
    run_pointer_alias()
        .env("POINTER_ALIAS_TRACE_LEVEL", "debug")
        .assert()
        .stdout("")
        .stderr(
            predicate::str::contains("before reseating")
                .and(predicate::str::contains("through_p: 200")),
        );
}
