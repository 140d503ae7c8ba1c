//! Error type shared by setup and configuration code.
//!
//! Per-tick gameplay never fails; every variant here is raised while
//! building a match (config, roster, surface) and is fatal to that attempt.

use std::fmt;

/// Errors raised while configuring or starting a match.
#[derive(Debug)]
pub enum FightError {
    /// The paint surface or drawing context could not be acquired.
    ResourceUnavailable(String),
    /// A precondition on match data was violated (zero frame count,
    /// wrong number of fighters, zero-area arena).
    InvalidConfiguration(String),
    /// The INI configuration file could not be read or written.
    Config(String),
    /// The roster JSON could not be parsed.
    Roster(serde_json::Error),
    /// A file could not be accessed.
    Io(std::io::Error),
}

impl fmt::Display for FightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FightError::ResourceUnavailable(msg) => write!(f, "Resource unavailable: {msg}"),
            FightError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {msg}"),
            FightError::Config(msg) => write!(f, "Config error: {msg}"),
            FightError::Roster(err) => write!(f, "Failed to parse roster: {err}"),
            FightError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for FightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FightError::Roster(err) => Some(err),
            FightError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FightError {
    fn from(err: serde_json::Error) -> Self {
        FightError::Roster(err)
    }
}

impl From<std::io::Error> for FightError {
    fn from(err: std::io::Error) -> Self {
        FightError::Io(err)
    }
}
