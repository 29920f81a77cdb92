// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented control protocol between a controller and the station.
//!
//! The protocol is deliberately loose:
//! - Controller sends one command per line, e.g. `setfreq 100000000`
//! - A line selects the *first* command in [`COMMAND_TABLE`] whose name occurs
//!   anywhere in it, so `restart` runs `start` and `nonstop` runs `stop`
//! - Station answers with zero or more `<...>` lines, never unsolicited
//!
//! Malformed input produces an [`Error`] for the operator log; the controller
//! gets no reply for it.

use std::fmt;

use crate::error::{Error, Result};
use crate::modulation::Modulation;
use crate::settings::{parse_frequency, SdrSettings};

/// Which handler a matched line is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Status,
    Start,
    Stop,
    Reload,
    SetMod,
    SetFreq,
}

/// One row of the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub argc: usize,
    pub kind: CommandKind,
}

/// Commands in match order. Order is observable: the first name found in a
/// line wins.
pub static COMMAND_TABLE: [CommandSpec; 6] = [
    CommandSpec {
        name: "status",
        argc: 0,
        kind: CommandKind::Status,
    },
    CommandSpec {
        name: "start",
        argc: 0,
        kind: CommandKind::Start,
    },
    CommandSpec {
        name: "stop",
        argc: 0,
        kind: CommandKind::Stop,
    },
    CommandSpec {
        name: "reload",
        argc: 0,
        kind: CommandKind::Reload,
    },
    CommandSpec {
        name: "setmod",
        argc: 1,
        kind: CommandKind::SetMod,
    },
    CommandSpec {
        name: "setfreq",
        argc: 1,
        kind: CommandKind::SetFreq,
    },
];

/// A fully validated controller command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Status,
    Start,
    Stop,
    Reload,
    SetMod(Modulation),
    SetFreq(u32),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Status => "status",
            Command::Start => "start",
            Command::Stop => "stop",
            Command::Reload => "reload",
            Command::SetMod(_) => "setmod",
            Command::SetFreq(_) => "setfreq",
        }
    }
}

/// Find the table entry for a line and pull out its arguments.
///
/// The token containing the match is skipped, then up to `argc` further
/// space-separated, non-empty tokens are taken. Extra tokens are ignored.
pub fn split_command(line: &str) -> Result<(&'static CommandSpec, Vec<&str>)> {
    let (spec, pos) = COMMAND_TABLE
        .iter()
        .find_map(|spec| line.find(spec.name).map(|pos| (spec, pos)))
        .ok_or_else(|| Error::UnknownCommand(line.to_string()))?;

    let mut tokens = line[pos..].split(' ').filter(|t| !t.is_empty());
    tokens.next();
    let args: Vec<&str> = tokens.take(spec.argc).collect();

    if args.len() != spec.argc {
        return Err(Error::MissingArguments {
            command: spec.name,
            expected: spec.argc,
            found: args.len(),
        });
    }
    Ok((spec, args))
}

/// Parse one trimmed line into a validated [`Command`].
pub fn parse_line(line: &str) -> Result<Command> {
    let (spec, args) = split_command(line)?;
    let arg = args.first().copied().unwrap_or_default();
    match spec.kind {
        CommandKind::Status => Ok(Command::Status),
        CommandKind::Start => Ok(Command::Start),
        CommandKind::Stop => Ok(Command::Stop),
        CommandKind::Reload => Ok(Command::Reload),
        CommandKind::SetMod => Ok(Command::SetMod(arg.parse()?)),
        CommandKind::SetFreq => Ok(Command::SetFreq(parse_frequency(arg)?)),
    }
}

/// Informational lines the station writes back to its controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Status {
        settings: SdrSettings,
        running: bool,
    },
    Starting,
    AlreadyRunning,
    StartFailed,
    Stopping,
    NotRunning,
    Modulation(Modulation),
    Frequency(u32),
}

impl Reply {
    /// The reply as it goes on the wire, newline included.
    pub fn to_line(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Status { settings, running } => write!(
                f,
                "<Freq: {}, Mod: {}, Running: {}>",
                settings.frequency_hz,
                settings.modulation,
                if *running { "yes" } else { "no" }
            ),
            Reply::Starting => write!(f, "<Starting librtlsdr...>"),
            Reply::AlreadyRunning => write!(f, "<Already running...>"),
            Reply::StartFailed => write!(f, "<Failed to start librtlsdr>"),
            Reply::Stopping => write!(f, "<Stopping librtlsdr...>"),
            Reply::NotRunning => write!(f, "<librtlsdr is not running>"),
            Reply::Modulation(m) => write!(f, "<Mod: {}>", m),
            Reply::Frequency(hz) => write!(f, "<Freq: {}>", hz),
        }
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
