// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sdrrc-core: Shared types for the sdrrc radio station daemon
//!
//! This crate holds the I/O-free pieces of the station: modulation schemes,
//! tuner settings, the session status machine, and the line-oriented control
//! protocol (command parsing and reply formatting).

pub mod error;
pub mod modulation;
pub mod protocol;
pub mod settings;
pub mod status;

pub use error::{Error, Result};
pub use modulation::Modulation;
pub use protocol::{parse_line, Command, CommandKind, Reply, COMMAND_TABLE};
pub use settings::{parse_frequency, SdrSettings, FREQUENCY_MAX, FREQUENCY_MIN};
pub use status::StationStatus;
