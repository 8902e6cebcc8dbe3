// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Factorial calculator with checked 128-bit overflow.
//!
//! ```
//! assert_eq!(fact::factorial_of(5), Ok(120));
//! assert!(fact::factorial_of(-1).is_err());
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod factorial;
pub mod report;

#[cfg(test)]
pub mod test_utils;

pub use error::FactorialError;
pub use factorial::{Factorials, MAX_INPUT, factorial_of, factorials};
