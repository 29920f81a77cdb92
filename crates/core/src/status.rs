// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session status of the station's single controller slot.

use std::fmt;

/// Where the station is in its accept/serve/recycle cycle.
///
/// `Idle` only exists before the listening socket is bound. After that the
/// station cycles `Listening -> Established -> Finished -> Listening`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StationStatus {
    #[default]
    Idle,
    Listening,
    Established,
    Finished,
}

impl StationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::Idle => "idle",
            StationStatus::Listening => "listening",
            StationStatus::Established => "established",
            StationStatus::Finished => "finished",
        }
    }

    /// Check if transitioning to the target status is allowed.
    pub fn can_transition_to(&self, target: StationStatus) -> bool {
        use StationStatus::*;
        matches!(
            (self, target),
            (Idle, Listening)
                | (Listening, Established)
                | (Established, Finished)
                | (Finished, Listening)
        )
    }
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
