// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the station daemon.

use thiserror::Error;

use crate::pipeline::Stage;

/// All errors the station daemon can hit outside of protocol parsing.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] sdrrc_core::Error),

    #[error("failed to spawn {stage} '{program}': {source}")]
    PipelineSpawn {
        stage: Stage,
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("missing host for manager mode\n  hint: pass --host <name>")]
    MissingHost,

    #[error("binding port {0} requires root privileges\n  hint: use a port of 1024 or above")]
    PrivilegedPort(u16),

    #[error("manager mode is not implemented")]
    ManagerUnsupported,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Process exit status for an error that aborts startup.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Config(_) | Error::Toml(_) | Error::Core(_) => 253,
            Error::PrivilegedPort(_) => 254,
            Error::MissingHost => 255,
            _ => 1,
        }
    }
}

/// A specialized Result type for station operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
