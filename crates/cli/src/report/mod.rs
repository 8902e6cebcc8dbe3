// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result reporting in text or JSON format.

mod json;
mod text;

use std::io::Write;

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::error::FactorialError;
use crate::factorial::{MAX_INPUT, factorial_of, factorials};

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// One input and its factorial, or the reason it has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub n: i64,
    pub result: Result<u128, FactorialError>,
}

impl Outcome {
    /// Compute the outcome for a single input.
    pub fn compute(n: i64) -> Self {
        Self {
            n,
            result: factorial_of(n),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Build outcomes for a run: the `0..=upto` table first, then each value.
///
/// `upto` above [`MAX_INPUT`] is clamped to the end of the table.
pub fn collect_outcomes(upto: Option<i64>, values: &[i64]) -> Vec<Outcome> {
    let mut outcomes = Vec::new();

    if let Some(upto) = upto {
        if upto > MAX_INPUT {
            tracing::warn!("--upto {} clamped to {}", upto, MAX_INPUT);
        }
        outcomes.extend(
            factorials()
                .take_while(|&(n, _)| n <= upto)
                .map(|(n, value)| Outcome { n, result: Ok(value) }),
        );
    }

    outcomes.extend(values.iter().map(|&n| Outcome::compute(n)));
    outcomes
}

/// Trait for writing outcomes in a given output format.
pub trait ReportFormatter {
    /// Write all outcomes to `writer`.
    fn format_to(&self, writer: &mut dyn WriteColor, outcomes: &[Outcome]) -> anyhow::Result<()>;
}

/// Write outcomes in the requested format.
pub fn format_report_to(
    writer: &mut dyn WriteColor,
    format: OutputFormat,
    outcomes: &[Outcome],
) -> anyhow::Result<()> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    formatter.format_to(writer, outcomes)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
