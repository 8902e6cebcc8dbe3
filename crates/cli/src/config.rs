// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading and discovery.
//!
//! Reads `fact.toml`, found by walking up from the current directory to
//! the git root, or given explicitly with `--config` / `FACT_CONFIG`.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::color::ColorMode;

/// Config file name searched for during discovery.
pub const CONFIG_FILE: &str = "fact.toml";

/// Only supported config schema version.
pub const CONFIG_VERSION: i64 = 1;

/// Top-level `fact.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema version; must be 1.
    pub version: i64,

    #[serde(default)]
    pub output: OutputConfig,
}

/// `[output]` table. Unset fields fall back to CLI defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub color: Option<ColorMode>,
}

/// Parse config from TOML text. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(content)
        .with_context(|| format!("invalid config in {}", path.display()))?;

    if config.version != CONFIG_VERSION {
        bail!(
            "unsupported config version {} in {} (expected {})",
            config.version,
            path.display(),
            CONFIG_VERSION
        );
    }

    Ok(config)
}

/// Load and parse a config file.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Find `fact.toml` starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.is_file() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve the config for a run.
///
/// An explicit path must exist. Without one, discovery runs from
/// `start_dir` and a missing file yields the default config.
pub fn resolve(explicit: Option<&Path>, start_dir: &Path) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return load(path);
    }

    match find_config(start_dir) {
        Some(path) => load(&path),
        None => {
            tracing::debug!("no {} found from {}", CONFIG_FILE, start_dir.display());
            Ok(Config {
                version: CONFIG_VERSION,
                ..Config::default()
            })
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
