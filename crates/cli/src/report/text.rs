// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use std::io::Write;

use termcolor::WriteColor;

use super::{Outcome, ReportFormatter};
use crate::color::scheme;

/// Text format formatter: `5! = 120`, one line per outcome.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format_to(&self, writer: &mut dyn WriteColor, outcomes: &[Outcome]) -> anyhow::Result<()> {
        for outcome in outcomes {
            writer.set_color(&scheme::label())?;
            write!(writer, "{}!", outcome.n)?;
            writer.reset()?;

            match &outcome.result {
                Ok(value) => {
                    write!(writer, " = ")?;
                    writer.set_color(&scheme::value())?;
                    write!(writer, "{}", value)?;
                    writer.reset()?;
                }
                Err(err) => {
                    write!(writer, ": ")?;
                    writer.set_color(&scheme::error())?;
                    write!(writer, "error")?;
                    writer.reset()?;
                    write!(writer, ": {}", err)?;
                }
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
