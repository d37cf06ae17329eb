use crate::SessionId;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// A guess rejected before evaluation. Rejected guesses never increment the
/// attempt counter and never appear in session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error, TS)]
#[ts(export)]
pub enum ValidationError {
    #[error("Please enter exactly 4 digits")]
    Format,
    #[error("Number cannot start with 0")]
    LeadingZero,
    #[error("Digits cannot repeat")]
    DuplicateDigit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error, TS)]
#[ts(export)]
pub enum GameError {
    #[error(transparent)]
    InvalidGuess(#[from] ValidationError),
    #[error("No active game. Please start a new game.")]
    NoActiveSession { session_id: SessionId },
    #[error("Player name cannot be empty")]
    EmptyPlayerName,
    #[error("Player name too long (max {max} characters)")]
    PlayerNameTooLong { max: usize },
}
