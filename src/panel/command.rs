//! The `vss` command: a client-side vehicle service status flag the user can
//! set from the input box.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const COMMAND_PREFIX: &str = "vss";

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[=\s]+").expect("valid separator pattern"));

/// Where the pretend customer is with the dealership. Any state may follow
/// any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VehicleServiceStatus {
    #[default]
    None,
    Dropoff,
    Inspect,
    NotStarted,
    InProcess,
    Complete,
}

impl VehicleServiceStatus {
    pub const ALL: [VehicleServiceStatus; 6] = [
        VehicleServiceStatus::None,
        VehicleServiceStatus::Dropoff,
        VehicleServiceStatus::Inspect,
        VehicleServiceStatus::NotStarted,
        VehicleServiceStatus::InProcess,
        VehicleServiceStatus::Complete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleServiceStatus::None => "none",
            VehicleServiceStatus::Dropoff => "dropoff",
            VehicleServiceStatus::Inspect => "inspect",
            VehicleServiceStatus::NotStarted => "notstarted",
            VehicleServiceStatus::InProcess => "inprocess",
            VehicleServiceStatus::Complete => "complete",
        }
    }
}

impl fmt::Display for VehicleServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleServiceStatus {
    type Err = String;

    /// Exact, case-sensitive match on the wire names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| format!("unknown vehicle service status: {}", s))
    }
}

/// What a line of input that starts with the prefix asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Bare `vss`.
    Show,
    /// `vss=<name>` or `vss <name>`.
    Set(String),
    /// Starts with the prefix but has no usable shape; swallowed.
    Malformed,
}

/// `None` when `input` is an ordinary message.
pub fn parse_command(input: &str) -> Option<Command> {
    let trimmed = input.trim();
    if !trimmed.starts_with(COMMAND_PREFIX) {
        return None;
    }

    if trimmed == COMMAND_PREFIX {
        return Some(Command::Show);
    }

    let parts: Vec<&str> = SEPARATOR_RE.split(trimmed).collect();
    match parts.as_slice() {
        [prefix, name] if *prefix == COMMAND_PREFIX && !name.is_empty() => {
            Some(Command::Set(name.to_string()))
        }
        _ => Some(Command::Malformed),
    }
}

/// Result of applying a command to the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Current(VehicleServiceStatus),
    Changed(VehicleServiceStatus),
    Unchanged {
        current: VehicleServiceStatus,
        requested: String,
    },
    Ignored,
}

impl Command {
    pub fn apply(&self, status: &mut VehicleServiceStatus) -> CommandOutcome {
        match self {
            Command::Show => CommandOutcome::Current(*status),
            Command::Set(name) => match name.parse::<VehicleServiceStatus>() {
                Ok(next) => {
                    *status = next;
                    CommandOutcome::Changed(next)
                }
                Err(_) => CommandOutcome::Unchanged {
                    current: *status,
                    requested: name.clone(),
                },
            },
            Command::Malformed => CommandOutcome::Ignored,
        }
    }
}

/// Initial state from a page query string such as `?vss=inspect&lang=en`.
/// Anything unusable yields the default state.
pub fn status_from_query(query: &str) -> VehicleServiceStatus {
    let Some(start) = query.find(COMMAND_PREFIX) else {
        return VehicleServiceStatus::default();
    };

    let fragment = &query[start..];
    let fragment = fragment.split('&').next().unwrap_or(fragment);

    let mut status = VehicleServiceStatus::default();
    if let Some(command) = parse_command(fragment) {
        command.apply(&mut status);
    }
    status
}
