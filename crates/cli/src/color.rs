// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color detection and color scheme.

use std::io::IsTerminal;

use serde::Deserialize;
use termcolor::{Color, ColorChoice, ColorSpec};

/// When to emit color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve a color mode to a `termcolor` choice for stdout.
///
/// `Auto` disables color when `NO_COLOR` is set or stdout is not a terminal.
pub fn resolve_color(mode: ColorMode) -> ColorChoice {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    resolve_color_with(mode, std::io::stdout().is_terminal(), no_color)
}

fn resolve_color_with(mode: ColorMode, is_terminal: bool, no_color: bool) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if no_color || !is_terminal => ColorChoice::Never,
        ColorMode::Auto => ColorChoice::Auto,
    }
}

/// Color scheme for text output.
pub mod scheme {
    use super::*;

    /// A computed factorial.
    pub fn value() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// The `error:` prefix.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// The `n!` label.
    pub fn label() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
