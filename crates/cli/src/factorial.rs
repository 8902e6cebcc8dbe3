// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Factorial computation with checked overflow.
//!
//! Results are `u128`. `34!` is the largest factorial that fits, so any
//! input above [`MAX_INPUT`] fails with [`FactorialError::Overflow`]
//! instead of wrapping or saturating.

use std::iter::FusedIterator;

use crate::error::FactorialError;

/// Largest input whose factorial fits in a `u128`.
pub const MAX_INPUT: i64 = 34;

/// Compute `n!`.
///
/// Returns `1` for `n = 0`. Negative inputs fail with
/// [`FactorialError::InvalidArgument`]; inputs above [`MAX_INPUT`] fail
/// with [`FactorialError::Overflow`].
pub fn factorial_of(n: i64) -> Result<u128, FactorialError> {
    if n < 0 {
        return Err(FactorialError::InvalidArgument { n });
    }
    (1..=n as u128).try_fold(1u128, |acc, k| {
        acc.checked_mul(k).ok_or(FactorialError::Overflow { n })
    })
}

/// Iterate over `(n, n!)` for `n` in `0..=MAX_INPUT`.
pub fn factorials() -> Factorials {
    Factorials { next: 0, value: 1 }
}

/// Table of factorials, built incrementally. See [`factorials`].
#[derive(Debug, Clone)]
pub struct Factorials {
    next: i64,
    value: u128,
}

impl Iterator for Factorials {
    type Item = (i64, u128);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > MAX_INPUT {
            return None;
        }
        let n = self.next;
        if n > 0 {
            // n <= MAX_INPUT, so this cannot overflow
            self.value = self.value.checked_mul(n as u128)?;
        }
        self.next += 1;
        Some((n, self.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (MAX_INPUT + 1 - self.next).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Factorials {}

impl FusedIterator for Factorials {}

#[cfg(test)]
#[path = "factorial_tests.rs"]
mod tests;
