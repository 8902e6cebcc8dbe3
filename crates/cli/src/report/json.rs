// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use std::io::Write;

use serde_json::json;
use termcolor::WriteColor;

use super::{Outcome, ReportFormatter};

/// JSON format formatter.
///
/// Factorials are emitted as decimal strings; most of them exceed the
/// 53-bit integer range of JSON consumers that parse numbers as doubles.
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_value(outcomes: &[Outcome]) -> serde_json::Value {
        let results: Vec<serde_json::Value> = outcomes
            .iter()
            .map(|outcome| match &outcome.result {
                Ok(value) => json!({
                    "n": outcome.n,
                    "factorial": value.to_string(),
                }),
                Err(err) => json!({
                    "n": outcome.n,
                    "error": {
                        "kind": err.kind(),
                        "message": err.to_string(),
                    },
                }),
            })
            .collect();

        json!({ "results": results })
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_to(&self, writer: &mut dyn WriteColor, outcomes: &[Outcome]) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &Self::to_value(outcomes))?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
