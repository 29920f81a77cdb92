// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared station state.
//!
//! The accept loop and the controller session both touch this state, so it
//! lives behind one async mutex. Every read-modify-write sequence (a status
//! transition, a command execution) happens under a single lock acquisition,
//! and no lock scope waits on a socket.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, OwnedMutexGuard};
use tracing::{debug, info};

use sdrrc_core::{Reply, SdrSettings, StationStatus};

use crate::pipeline::{PipelineConfig, Supervisor};

/// Everything guarded by the station lock.
///
/// Nothing here touches a socket: replies are computed under the lock and
/// written by the session task after the guard is released.
pub struct Station {
    pub status: StationStatus,
    pub settings: SdrSettings,
    /// Peer address of the attached controller.
    pub controller: Option<SocketAddr>,
    pub supervisor: Supervisor,
}

impl Station {
    /// Move to `next` if the session machine allows it.
    ///
    /// Returns false (and leaves the status alone) for an illegal transition.
    pub fn set_status(&mut self, next: StationStatus) -> bool {
        if !self.status.can_transition_to(next) {
            debug!("ignoring status change {} -> {}", self.status, next);
            return false;
        }
        debug!("status {} -> {}", self.status, next);
        self.status = next;
        true
    }

    /// Current settings and running flag as a status reply.
    pub fn status_summary(&self) -> Reply {
        Reply::Status {
            settings: self.settings,
            running: self.supervisor.is_running(),
        }
    }
}

/// Cloneable handle to the station state.
#[derive(Clone)]
pub struct StationRuntime {
    inner: Arc<Mutex<Station>>,
}

impl StationRuntime {
    pub fn new(settings: SdrSettings, pipeline: PipelineConfig) -> Self {
        StationRuntime {
            inner: Arc::new(Mutex::new(Station {
                status: StationStatus::Idle,
                settings,
                controller: None,
                supervisor: Supervisor::new(pipeline),
            })),
        }
    }

    /// Take the station lock.
    pub async fn lock(&self) -> MutexGuard<'_, Station> {
        self.inner.lock().await
    }

    /// Take the station lock with a guard that can move to another thread,
    /// e.g. into `spawn_blocking` for process work.
    pub async fn lock_owned(&self) -> OwnedMutexGuard<Station> {
        Arc::clone(&self.inner).lock_owned().await
    }

    /// Take the lock only if nobody holds it.
    pub fn try_lock(&self) -> Option<MutexGuard<'_, Station>> {
        self.inner.try_lock().ok()
    }

    pub async fn status(&self) -> StationStatus {
        self.lock().await.status
    }

    #[cfg(test)]
    pub async fn settings(&self) -> SdrSettings {
        self.lock().await.settings
    }

    #[cfg(test)]
    pub async fn is_running(&self) -> bool {
        self.lock().await.supervisor.is_running()
    }

    /// Process IDs as `(tuner, encoder)` while the pipeline runs.
    #[cfg(test)]
    pub async fn pipeline_pids(&self) -> Option<(u32, u32)> {
        self.lock().await.supervisor.pids()
    }

    /// Reclaim the pipeline on daemon exit. The controller connection is
    /// left to its session task.
    pub async fn shutdown(&self) {
        let mut station = self.lock().await;
        if let Some((tuner, encoder)) = station.supervisor.pids() {
            info!(
                "reclaiming pipeline (tuner pid {}, encoder pid {})",
                tuner, encoder
            );
            station.supervisor.stop();
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
