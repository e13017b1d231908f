// Copyright 2024 Martin Pool

//! Best-effort conversion of a string to an integer, following C `atoi`.
//!
//! Conversion stops at the first character that can't continue the number,
//! and a string with no leading digits converts to 0. This never fails, so
//! `factorial abc` behaves exactly like `factorial 0`.

/// Convert the leading decimal integer in `s` to an `i32`.
pub fn atoi(s: &str) -> i32 {
    atoi_bytes(s.as_bytes())
}

/// Convert the leading decimal integer in raw bytes, which need not be UTF-8,
/// to an `i32`.
///
/// Leading ASCII whitespace is skipped and one `+` or `-` sign is accepted.
///
/// Out-of-range values behave as with glibc, where `atoi` is `(int) strtol(s)`:
/// the value saturates at the bounds of a 64-bit `long` and is then truncated
/// to 32 bits.
pub fn atoi_bytes(s: &[u8]) -> i32 {
    let mut bytes = s
        .iter()
        .copied()
        .skip_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r'))
        .peekable();
    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };
    let mut value: i64 = 0;
    for digit in bytes.map_while(|b| b.is_ascii_digit().then(|| i64::from(b - b'0'))) {
        // Accumulate towards the sign so that i64::MIN is reachable.
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value as i32
}
