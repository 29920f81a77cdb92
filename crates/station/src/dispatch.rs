// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution against the station state.
//!
//! Each command runs under the station lock and yields the reply lines for
//! the controller; the caller writes them once the lock is released. Lines
//! that fail to parse are logged for the operator and dropped: the
//! controller gets no reply and nothing changes.

use tracing::{debug, error, info, warn};

use sdrrc_core::{parse_line, Command, Error as ProtocolError, Reply};

use crate::state::{Station, StationRuntime};

/// Parse one trimmed line and run the command it names.
pub async fn dispatch_line(runtime: &StationRuntime, line: &str) -> Vec<Reply> {
    match parse_line(line) {
        Ok(command) => execute(runtime, command).await,
        Err(ProtocolError::UnknownCommand(line)) => {
            warn!("ignoring unrecognized line: {:?}", line);
            Vec::new()
        }
        Err(e) => {
            error!("{}", e);
            Vec::new()
        }
    }
}

/// Run a parsed command and return its replies, in order.
pub async fn execute(runtime: &StationRuntime, command: Command) -> Vec<Reply> {
    debug!("executing {}", command.name());
    match command {
        Command::Status => {
            let station = runtime.lock().await;
            info!("Sending status...");
            vec![station.status_summary()]
        }
        Command::Start => start(runtime).await,
        Command::Stop => vec![stop(runtime).await],
        // Two lock acquisitions: a status query may slip in between and see
        // the pipeline stopped.
        Command::Reload => {
            let mut replies = vec![stop(runtime).await];
            replies.extend(start(runtime).await);
            replies
        }
        Command::SetMod(modulation) => {
            runtime.lock().await.settings.modulation = modulation;
            info!("Changing modulation scheme to {}", modulation);
            vec![Reply::Modulation(modulation)]
        }
        Command::SetFreq(hz) => {
            runtime.lock().await.settings.frequency_hz = hz;
            info!("Changing frequency to {}", hz);
            vec![Reply::Frequency(hz)]
        }
    }
}

async fn start(runtime: &StationRuntime) -> Vec<Reply> {
    let outcome = with_station(runtime, |station| {
        let settings = station.settings;
        station.supervisor.start(&settings)
    })
    .await;
    outcome.unwrap_or_else(|| vec![Reply::Starting, Reply::StartFailed])
}

async fn stop(runtime: &StationRuntime) -> Reply {
    let outcome = with_station(runtime, |station| station.supervisor.stop()).await;
    outcome.unwrap_or(Reply::NotRunning)
}

/// Run process work under the station lock on the blocking pool, so spawning
/// and reaping children never stalls an async worker.
///
/// Returns `None` if the blocking task died.
async fn with_station<T, F>(runtime: &StationRuntime, work: F) -> Option<T>
where
    T: Send + 'static,
    F: FnOnce(&mut Station) -> T + Send + 'static,
{
    let mut station = runtime.lock_owned().await;
    match tokio::task::spawn_blocking(move || work(&mut station)).await {
        Ok(value) => Some(value),
        Err(e) => {
            error!("pipeline task failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
