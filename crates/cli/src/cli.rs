// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

use crate::color::ColorMode;
use crate::config::Config;

/// Compute factorials with checked 128-bit arithmetic
#[derive(Debug, Parser)]
#[command(name = "fact")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Integers to compute factorials of
    #[arg(
        value_name = "N",
        allow_negative_numbers = true,
        required_unless_present = "upto"
    )]
    pub values: Vec<i64>,

    /// Print the table 0! through N! (clamped to 34)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(i64).range(0..))]
    pub upto: Option<i64>,

    /// Output format [default: text]
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// Color output mode [default: auto]
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "FACT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Output format: flag, then config, then default.
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        self.output.or(config.output.format).unwrap_or_default()
    }

    /// Color mode: `--no-color`, then `--color`, then config, then default.
    pub fn color_mode(&self, config: &Config) -> ColorMode {
        if self.no_color {
            return ColorMode::Never;
        }
        self.color.or(config.output.color).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
