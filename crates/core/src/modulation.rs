// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Demodulation schemes understood by the tuner stage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Demodulation scheme passed to the tuner as `-M <code>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Modulation {
    /// Narrowband FM. Default for new stations.
    #[default]
    #[serde(rename = "fm")]
    Fm,
    /// Wideband (broadcast) FM.
    #[serde(rename = "wbfm")]
    WidebandFm,
    /// Raw I/Q passthrough.
    #[serde(rename = "raw")]
    Raw,
    /// Amplitude modulation.
    #[serde(rename = "am")]
    Am,
    /// Upper sideband.
    #[serde(rename = "usb")]
    Usb,
    /// Lower sideband.
    #[serde(rename = "lsb")]
    Lsb,
}

impl Modulation {
    /// All schemes, in wire-code order.
    pub const ALL: [Modulation; 6] = [
        Modulation::Fm,
        Modulation::WidebandFm,
        Modulation::Raw,
        Modulation::Am,
        Modulation::Usb,
        Modulation::Lsb,
    ];

    /// Returns the wire code used by the control protocol and the tuner.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modulation::Fm => "fm",
            Modulation::WidebandFm => "wbfm",
            Modulation::Raw => "raw",
            Modulation::Am => "am",
            Modulation::Usb => "usb",
            Modulation::Lsb => "lsb",
        }
    }
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Modulation {
    type Err = Error;

    /// Codes are matched exactly; `FM` is not `fm`.
    fn from_str(s: &str) -> Result<Self> {
        Modulation::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::UnknownModulation(s.to_string()))
    }
}

#[cfg(test)]
#[path = "modulation_tests.rs"]
mod tests;
