// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The daemon binary with configuration env vars cleared.
pub fn sdrrcd() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("sdrrcd").unwrap();
    cmd.env_remove("SDRRC_HOST")
        .env_remove("SDRRC_PORT")
        .env_remove("SDRRC_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a config file into a fresh temp directory.
pub fn config_file(contents: &str) -> (TempDir, String) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sdrrc.toml");
    std::fs::write(&path, contents).unwrap();
    let path = path.display().to_string();
    (temp, path)
}

pub fn running_as_root() -> bool {
    nix::unistd::geteuid().is_root() || nix::unistd::getuid().is_root()
}
