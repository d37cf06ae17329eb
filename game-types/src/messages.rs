use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{GameSummary, Score, SessionId};

/// Response to a new-game request.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewGameResponse {
    pub session_id: SessionId,
    /// Most recent finished games, most recent first (at most 5).
    pub recent_games: Vec<GameSummary>,
    /// Best wins, fewest attempts first (at most 10).
    pub leaderboard: Vec<GameSummary>,
}

/// Response to an accepted guess.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessResponse {
    pub guess: String,
    pub feedback: String,
    pub score: Score,
    pub attempt: u32,
    pub over: bool,
    pub won: bool,
    /// Present iff `over` — the secret is never revealed mid-game.
    pub secret_code: Option<String>,
    /// Refreshed recent-games log, present iff `over`.
    pub recent_games: Option<Vec<GameSummary>>,
}
