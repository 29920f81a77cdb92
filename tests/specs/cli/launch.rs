// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Startup validation: every case here must exit before binding a socket.

#![allow(clippy::unwrap_used)]

use super::common::*;
use yare::parameterized;

#[parameterized(
    zero = { "0" },
    too_big = { "70000" },
    not_a_number = { "ssh" },
)]
fn invalid_port_is_usage_error(port: &str) {
    sdrrcd()
        .args(["--port", port])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--port"));
}

#[test]
fn privileged_port_requires_root() {
    if running_as_root() {
        return;
    }
    sdrrcd()
        .args(["--port", "80"])
        .assert()
        .code(254)
        .stderr(predicate::str::contains("requires root privileges"));
}

#[test]
fn manager_without_host_is_rejected() {
    sdrrcd()
        .arg("--manager")
        .assert()
        .code(255)
        .stderr(predicate::str::contains("missing host"));
}

#[test]
fn manager_mode_is_not_implemented() {
    sdrrcd()
        .args(["--manager", "--host", "station.local", "--port", "17920"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("manager mode is not implemented"));
}

#[test]
fn manager_host_from_env() {
    sdrrcd()
        .arg("--manager")
        .env("SDRRC_HOST", "station.local")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("manager mode is not implemented"));
}

#[test]
fn missing_config_file_fails_startup() {
    sdrrcd()
        .args(["--config", "/nonexistent/sdrrc.toml"])
        .assert()
        .code(253)
        .stderr(predicate::str::contains("cannot read"));
}

#[parameterized(
    syntax = { "port = " },
    unknown_key = { "gain = 40" },
    bad_modulation = { "[defaults]\nmodulation = \"nfm\"" },
    bad_frequency = { "[defaults]\nfrequency = 1" },
)]
fn invalid_config_file_fails_startup(contents: &str) {
    let (_temp, path) = config_file(contents);
    sdrrcd().args(["--config", &path]).assert().code(253);
}

#[test]
fn log_file_receives_startup_errors() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("sdrrcd.log");
    sdrrcd()
        .arg("--manager")
        .arg("--log-file")
        .arg(&log)
        .assert()
        .code(255);
    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("missing host"));
}
