// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version output.

#![allow(clippy::unwrap_used)]

use super::common::*;
use yare::parameterized;

#[parameterized(
    long = { "--help" },
    short = { "-h" },
)]
fn help_lists_options(flag: &str) {
    sdrrcd()
        .arg(flag)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--manager"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn version_prints_package_version() {
    sdrrcd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
