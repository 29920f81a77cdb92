// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sdrrcd - remote control daemon for an SDR streaming station.
//!
//! Accepts a single controller over TCP and lets it tune, start, stop, and
//! reload an `rtl_fm | ffmpeg` pipeline that streams to Icecast.
//!
//! Usage:
//!   sdrrcd [--port <n>] [--config <path>] [--verbose]

mod config;
mod dispatch;
mod error;
mod pipeline;
mod server;
mod state;
#[cfg(test)]
mod test_support;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use config::{Args, StationConfig};
use state::StationRuntime;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose, args.log_file.as_deref());

    let config = match StationConfig::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(e.exit_code());
        }
    };
    if let Err(e) = config.check_launch(config::is_privileged()) {
        error!("{}", e);
        return ExitCode::from(e.exit_code());
    }

    let shutdown = CancellationToken::new();
    if let Err(e) = watch_signals(shutdown.clone()) {
        error!("failed to install signal handlers: {}", e);
        return ExitCode::FAILURE;
    }

    info!(
        "Running in station mode, listening on port: tcp/{}",
        config.port
    );
    let runtime = StationRuntime::new(config.settings, config.pipeline.clone());

    let listener = match server::bind(config.port) {
        Ok(listener) => listener,
        Err(e) => {
            error!("cannot bind the socket: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = server::run(listener, runtime.clone(), config.poll_interval, shutdown).await;
    runtime.shutdown().await;

    match result {
        Ok(()) => {
            info!("sdrrcd stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("station error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Cancel `shutdown` on SIGINT or SIGTERM.
fn watch_signals(shutdown: CancellationToken) -> std::io::Result<()> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = interrupt.recv() => {}
            _ = terminate.recv() => {}
        }
        warn!("Closing program...");
        shutdown.cancel();
    });
    Ok(())
}

fn setup_logging(verbose: bool, log_path: Option<&Path>) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Try to open the log file, fall back to stderr
    let file = log_path.and_then(|path| {
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    match file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}
