// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fake tuner/encoder programs for exercising the pipeline without radio
//! hardware or ffmpeg.

#![cfg(test)]
#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use nix::sys::signal::kill;
use nix::unistd::Pid;
use tempfile::TempDir;

use crate::pipeline::{EncoderConfig, PipelineConfig, TunerConfig};

/// A temp directory holding shell scripts that stand in for both stages.
///
/// The tuner echoes its arguments down the pipe and then idles. The encoder
/// records its own arguments and copies whatever arrives on stdin to a file.
pub struct FakePrograms {
    pub dir: TempDir,
    pub config: PipelineConfig,
}

impl FakePrograms {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let tuner = write_script(dir.path(), "tuner", "echo \"$@\"\nexec sleep 30\n");
        let encoder_body = format!(
            "echo \"$@\" > \"{}\"\nexec cat > \"{}\"\n",
            dir.path().join("encoder.args").display(),
            dir.path().join("encoder.out").display(),
        );
        let encoder = write_script(dir.path(), "encoder", &encoder_body);

        let config = PipelineConfig {
            tuner: TunerConfig {
                program: tuner.display().to_string(),
                ..TunerConfig::default()
            },
            encoder: EncoderConfig {
                program: encoder.display().to_string(),
                ..EncoderConfig::default()
            },
        };
        FakePrograms { dir, config }
    }

    /// Same encoder, but the tuner program does not exist.
    pub fn with_missing_tuner() -> Self {
        let mut fake = FakePrograms::new();
        fake.config.tuner.program = fake.dir.path().join("no-such-tuner").display().to_string();
        fake
    }

    /// The encoder program does not exist.
    pub fn with_missing_encoder() -> Self {
        let mut fake = FakePrograms::new();
        fake.config.encoder.program = fake.dir.path().join("no-such-encoder").display().to_string();
        fake
    }

    pub fn encoder_output(&self) -> PathBuf {
        self.dir.path().join("encoder.out")
    }

    pub fn encoder_args(&self) -> PathBuf {
        self.dir.path().join("encoder.args")
    }
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Poll `path` until it contains `needle`, returning the full contents.
pub fn wait_for_contents(path: &Path, needle: &str, timeout: Duration) -> Option<String> {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Ok(contents) = fs::read_to_string(path) {
            if contents.contains(needle) {
                return Some(contents);
            }
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    None
}

/// True if a process with this PID exists (signal 0 probe).
pub fn pid_alive(pid: u32) -> bool {
    kill(Pid::from_raw(pid as i32), None).is_ok()
}
