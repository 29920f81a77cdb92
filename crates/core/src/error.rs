// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sdrrc-core operations.

use thiserror::Error;

/// Protocol and validation errors raised while interpreting controller input.
///
/// None of these are reported back to the controller; the station logs them
/// and drops the offending line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),

    #[error("<{command}>: missing arguments (expected {expected}, found {found})")]
    MissingArguments {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("unknown modulation scheme: '{0}'\n  hint: valid schemes are: fm, wbfm, raw, am, usb, lsb")]
    UnknownModulation(String),

    #[error("invalid frequency value: '{0}'")]
    InvalidFrequency(String),

    #[error("frequency is out of range (40000-120000000): {0}")]
    FrequencyOutOfRange(i64),
}

/// A specialized Result type for sdrrc-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
