#![cfg_attr(not(test), no_std)]

//! Iterative Fibonacci with overflow detection at the 32-bit signed ceiling.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Largest value a result may take: the maximum 32-bit signed integer.
pub const OVERFLOW_CEILING: u32 = i32::MAX as u32;

/// Text shown in place of a value once the sequence leaves the 32-bit range.
pub const OVERFLOW_TEXT: &str = "Переполнение";

/// Outcome of [`fib`]: either the Fibonacci value or an overflow marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FibResult {
    Value(i32),
    Overflow,
}

impl FibResult {
    pub fn value(self) -> Option<i32> {
        match self {
            FibResult::Value(v) => Some(v),
            FibResult::Overflow => None,
        }
    }

    pub fn is_overflow(self) -> bool {
        matches!(self, FibResult::Overflow)
    }

    /// Converts into a `Result` so callers can propagate overflow with `?`.
    pub fn into_result(self) -> Result<i32, Overflow> {
        self.value().ok_or(Overflow)
    }
}

impl fmt::Display for FibResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FibResult::Value(v) => write!(f, "{v}"),
            FibResult::Overflow => f.write_str(OVERFLOW_TEXT),
        }
    }
}

/// Error form of [`FibResult::Overflow`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overflow;

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(OVERFLOW_TEXT)
    }
}

/// Computes the `n`-th Fibonacci number, or [`FibResult::Overflow`] if it
/// exceeds [`OVERFLOW_CEILING`].
///
/// Any `n <= 1` is returned unchanged, negative inputs included.
pub fn fib(n: i32) -> FibResult {
    if n <= 1 {
        return FibResult::Value(n);
    }

    // At the top of iteration i: current = F(i - 1), prev = F(i - 2).
    let mut prev: u32 = 0;
    let mut current: u32 = 1;
    for i in 2..=n {
        // checked_add failing is the wraparound case (temp < prev)
        let temp = match prev.checked_add(current) {
            Some(temp) if temp <= OVERFLOW_CEILING => temp,
            _ => {
                tracing::debug!(n, i, "fibonacci value exceeds the 32-bit signed range");
                return FibResult::Overflow;
            }
        };
        prev = current;
        current = temp;
    }

    // current <= OVERFLOW_CEILING == i32::MAX
    FibResult::Value(current as i32)
}
