// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default command: compute and print factorials.

use termcolor::StandardStream;

use fact::cli::Cli;
use fact::color::resolve_color;
use fact::config;
use fact::error::ExitCode;
use fact::report::{self, Outcome};

/// Run the command.
///
/// Errors returned here are config or I/O failures. Inputs without a
/// factorial are reported in the output and give [`ExitCode::Failure`].
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;

    let format = cli.output_format(&config);
    let color = resolve_color(cli.color_mode(&config));

    let outcomes = report::collect_outcomes(cli.upto, &cli.values);
    tracing::debug!("computed {} outcomes", outcomes.len());

    let mut stdout = StandardStream::stdout(color);
    report::format_report_to(&mut stdout, format, &outcomes)?;

    if outcomes.iter().all(Outcome::is_ok) {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::Failure)
    }
}
