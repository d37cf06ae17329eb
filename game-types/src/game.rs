use crate::CODE_LENGTH;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Result of evaluating one guess against the secret code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Score {
    /// Digits in the correct position.
    pub exact: u8,
    /// Correct digit values in the wrong position, counted without
    /// consuming any secret digit more than once.
    pub partial: u8,
}

impl Score {
    pub fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    pub fn is_win(&self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Render the feedback shown to the player: `+E` for exact matches,
    /// `-P` for partial matches, and the distinguished `"0"` when neither
    /// occurred (never `"+0 -0"`).
    pub fn feedback(&self) -> String {
        if self.exact == 0 && self.partial == 0 {
            return "0".to_string();
        }

        let mut feedback = String::new();
        if self.exact > 0 {
            feedback.push_str(&format!("+{}", self.exact));
        }
        if self.partial > 0 {
            if !feedback.is_empty() {
                feedback.push(' ');
            }
            feedback.push_str(&format!("-{}", self.partial));
        }
        feedback
    }
}

/// Lifecycle of a single game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SessionStatus {
    /// Attempts remain and the code has not been found.
    Active,
    /// The latest guess matched every position.
    Won,
    /// The attempt cap was reached without finding the code.
    Lost,
}

impl SessionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Won | SessionStatus::Lost)
    }
}

/// One accepted guess and its evaluation, in attempt order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessRecord {
    pub guess: String,
    pub score: Score,
    pub feedback: String,
    pub attempt: u32,
}

/// Immutable snapshot of a finished game, used for the recent-games log
/// and the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameSummary {
    pub player: String,
    pub attempts: u32,
    pub won: bool,
    pub secret_code: String,
    pub timestamp: String, // ISO 8601 string
    pub elapsed_seconds: u64,
    pub guesses: Vec<GuessRecord>,
}
