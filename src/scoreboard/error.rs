//! Scoreboard errors.

use std::fmt;

/// Errors from scoreboard operations and storage.
#[derive(Debug)]
pub enum ScoreboardError {
    /// Team names must contain something other than whitespace.
    EmptyName,
    /// No team at this position.
    UnknownTeam(usize),
    /// Reading or writing storage failed.
    Io(std::io::Error),
    /// Stored data was not a valid team list.
    Json(serde_json::Error),
}

impl fmt::Display for ScoreboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreboardError::EmptyName => write!(f, "team name is empty"),
            ScoreboardError::UnknownTeam(position) => write!(f, "no team at position {position}"),
            ScoreboardError::Io(err) => write!(f, "storage error: {err}"),
            ScoreboardError::Json(err) => write!(f, "invalid stored teams: {err}"),
        }
    }
}

impl std::error::Error for ScoreboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScoreboardError::Io(err) => Some(err),
            ScoreboardError::Json(err) => Some(err),
            ScoreboardError::EmptyName | ScoreboardError::UnknownTeam(_) => None,
        }
    }
}

impl From<std::io::Error> for ScoreboardError {
    fn from(err: std::io::Error) -> Self {
        ScoreboardError::Io(err)
    }
}

impl From<serde_json::Error> for ScoreboardError {
    fn from(err: serde_json::Error) -> Self {
        ScoreboardError::Json(err)
    }
}

/// Result type for scoreboard operations.
pub type ScoreboardResult<T> = Result<T, ScoreboardError>;
