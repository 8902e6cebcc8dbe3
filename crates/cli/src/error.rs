// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use thiserror::Error;

use crate::factorial::MAX_INPUT;

/// Failure to compute a factorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FactorialError {
    /// The input was negative.
    #[error("factorial is undefined for negative input {n}")]
    InvalidArgument { n: i64 },

    /// The result does not fit in a `u128`.
    #[error("{n}! does not fit in 128 bits (max input is {max})", max = MAX_INPUT)]
    Overflow { n: i64 },
}

impl FactorialError {
    /// Stable machine-readable label, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            FactorialError::InvalidArgument { .. } => "invalid_argument",
            FactorialError::Overflow { .. } => "overflow",
        }
    }

    /// The input that caused the error.
    pub fn input(&self) -> i64 {
        match *self {
            FactorialError::InvalidArgument { n } | FactorialError::Overflow { n } => n,
        }
    }
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// At least one input had no factorial.
    Failure = 1,
    ConfigError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
