//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command running the fact binary in an isolated environment.
///
/// The working directory is an empty git root so no `fact.toml` from the
/// surrounding checkout is picked up.
pub fn fact_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fact"));
    cmd.current_dir(cwd)
        .env_remove("FACT_CONFIG")
        .env_remove("FACT_LOG")
        .env_remove("NO_COLOR");
    cmd
}

/// Temp directory marked as a git root.
pub fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

/// Temp git root with a `fact.toml`.
pub fn project_with_config(config: &str) -> TempDir {
    let dir = project();
    std::fs::write(dir.path().join("fact.toml"), config).unwrap();
    dir
}
