// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tuner settings shared between the command handlers and the pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::modulation::Modulation;

/// Lowest frequency (Hz) a controller may tune to.
pub const FREQUENCY_MIN: u32 = 40_000;
/// Highest frequency (Hz) a controller may tune to.
pub const FREQUENCY_MAX: u32 = 120_000_000;
/// Frequency a freshly started station tunes to.
pub const DEFAULT_FREQUENCY: u32 = 94_500_000;

/// What the tuner stage is asked to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdrSettings {
    pub modulation: Modulation,
    pub frequency_hz: u32,
}

impl Default for SdrSettings {
    fn default() -> Self {
        SdrSettings {
            modulation: Modulation::Fm,
            frequency_hz: DEFAULT_FREQUENCY,
        }
    }
}

impl SdrSettings {
    pub fn new(modulation: Modulation, frequency_hz: u32) -> Self {
        SdrSettings {
            modulation,
            frequency_hz,
        }
    }
}

/// Parse a controller-supplied frequency.
///
/// The whole string must be a base-10 integer (an optional sign is accepted,
/// trailing characters are not) and must lie in
/// `FREQUENCY_MIN..=FREQUENCY_MAX`.
pub fn parse_frequency(s: &str) -> Result<u32> {
    let value: i64 = s
        .parse()
        .map_err(|_| Error::InvalidFrequency(s.to_string()))?;
    check_frequency(value)
}

/// Range-check a frequency that is already numeric.
pub fn check_frequency(value: i64) -> Result<u32> {
    if value < i64::from(FREQUENCY_MIN) || value > i64::from(FREQUENCY_MAX) {
        return Err(Error::FrequencyOutOfRange(value));
    }
    u32::try_from(value).map_err(|_| Error::FrequencyOutOfRange(value))
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
