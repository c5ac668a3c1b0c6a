//! User commands accepted by the timer

use std::{fmt, str::FromStr};

use crate::state::SessionType;

/// The only ways a user can change the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a paused countdown or pause a running one
    ToggleRun,
    /// Refill the current session and stop
    Reset,
    /// Load a full session of the given type and stop
    SwitchSession(SessionType),
    /// Mute or unmute the completion sound
    ToggleSound,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toggle" | "start" | "pause" => Ok(Command::ToggleRun),
            "reset" => Ok(Command::Reset),
            "work" => Ok(Command::SwitchSession(SessionType::Work)),
            "break" => Ok(Command::SwitchSession(SessionType::Break)),
            "sound" => Ok(Command::ToggleSound),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ToggleRun => write!(f, "toggle"),
            Command::Reset => write!(f, "reset"),
            Command::SwitchSession(target) => write!(f, "{}", target.as_str()),
            Command::ToggleSound => write!(f, "sound"),
        }
    }
}
