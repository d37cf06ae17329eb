use anyhow::Result;
use game_types::GameSummary;
use serde::{Deserialize, Serialize};

/// How many finished games the recent log keeps.
pub const RECENT_GAMES_CAP: usize = 5;
/// How many wins the leaderboard keeps.
pub const LEADERBOARD_CAP: usize = 10;

/// Serialized shape of the bounded history lists, as handed to a
/// [`HistoryStore`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredHistory {
    pub recent_games: Vec<GameSummary>,
    pub leaderboard: Vec<GameSummary>,
}

/// Persistence port for the history lists. The core loads once at startup
/// and saves after each finished game; it never touches storage directly.
pub trait HistoryStore {
    fn load(&self) -> Result<StoredHistory>;
    fn save(&self, history: &StoredHistory) -> Result<()>;
}

/// In-memory bounded history: a most-recent-first log of finished games and
/// a leaderboard of wins ordered by (attempts ascending, newest first).
#[derive(Debug, Clone, Default)]
pub struct GameHistory {
    recent_games: Vec<GameSummary>,
    leaderboard: Vec<GameSummary>,
}

impl GameHistory {
    /// Rehydrate from persisted state, re-applying the caps in case the
    /// stored lists were written by an older deployment with larger bounds.
    pub fn from_stored(stored: StoredHistory) -> Self {
        let mut history = Self {
            recent_games: stored.recent_games,
            leaderboard: stored.leaderboard,
        };
        history.recent_games.truncate(RECENT_GAMES_CAP);
        history.leaderboard.truncate(LEADERBOARD_CAP);
        history
    }

    pub fn to_stored(&self) -> StoredHistory {
        StoredHistory {
            recent_games: self.recent_games.clone(),
            leaderboard: self.leaderboard.clone(),
        }
    }

    /// Record a finished game: prepend to the recent log and, for wins,
    /// insert into the leaderboard at its sorted position.
    pub fn record(&mut self, summary: GameSummary) {
        if summary.won {
            self.insert_leaderboard(summary.clone());
        }

        self.recent_games.insert(0, summary);
        self.recent_games.truncate(RECENT_GAMES_CAP);
    }

    fn insert_leaderboard(&mut self, summary: GameSummary) {
        // Summaries arrive in completion order, so placing a new entry before
        // existing entries with the same attempt count keeps ties newest-first.
        let pos = self
            .leaderboard
            .partition_point(|entry| entry.attempts < summary.attempts);
        self.leaderboard.insert(pos, summary);
        self.leaderboard.truncate(LEADERBOARD_CAP);
    }

    pub fn recent_games(&self) -> &[GameSummary] {
        &self.recent_games
    }

    pub fn leaderboard(&self) -> &[GameSummary] {
        &self.leaderboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(n: u32, attempts: u32, won: bool) -> GameSummary {
        GameSummary {
            player: format!("player-{n}"),
            attempts,
            won,
            secret_code: "1234".to_string(),
            // Monotonic fake timestamps, newest games have larger n
            timestamp: format!("2026-01-01T00:{:02}:00+00:00", n),
            elapsed_seconds: 30,
            guesses: Vec::new(),
        }
    }

    #[test]
    fn test_recent_log_keeps_five_most_recent() {
        let mut history = GameHistory::default();
        for n in 0..6 {
            history.record(summary(n, 5, false));
        }

        let recent = history.recent_games();
        assert_eq!(recent.len(), RECENT_GAMES_CAP);
        // Most recent first: games 5, 4, 3, 2, 1
        let players: Vec<_> = recent.iter().map(|s| s.player.as_str()).collect();
        assert_eq!(
            players,
            ["player-5", "player-4", "player-3", "player-2", "player-1"]
        );
    }

    #[test]
    fn test_losses_never_reach_leaderboard() {
        let mut history = GameHistory::default();
        history.record(summary(0, 3, false));
        history.record(summary(1, 3, true));

        assert_eq!(history.recent_games().len(), 2);
        assert_eq!(history.leaderboard().len(), 1);
        assert_eq!(history.leaderboard()[0].player, "player-1");
    }

    #[test]
    fn test_leaderboard_orders_by_attempts_then_recency() {
        let mut history = GameHistory::default();
        history.record(summary(0, 7, true));
        history.record(summary(1, 3, true));
        history.record(summary(2, 5, true));
        history.record(summary(3, 3, true)); // same attempts as player-1, newer

        let attempts: Vec<_> = history.leaderboard().iter().map(|s| s.attempts).collect();
        assert_eq!(attempts, [3, 3, 5, 7]);

        // Newest first among equal attempt counts
        assert_eq!(history.leaderboard()[0].player, "player-3");
        assert_eq!(history.leaderboard()[1].player, "player-1");
    }

    #[test]
    fn test_leaderboard_truncates_to_cap() {
        let mut history = GameHistory::default();
        for n in 0..12 {
            history.record(summary(n, 4 + n, true));
        }

        assert_eq!(history.leaderboard().len(), LEADERBOARD_CAP);
        // The two slowest wins fell off the end
        let max_attempts = history
            .leaderboard()
            .iter()
            .map(|s| s.attempts)
            .max()
            .unwrap();
        assert_eq!(max_attempts, 13);
    }

    #[test]
    fn test_from_stored_reapplies_caps() {
        let stored = StoredHistory {
            recent_games: (0..8).map(|n| summary(n, 5, false)).collect(),
            leaderboard: (0..12).map(|n| summary(n, 5, true)).collect(),
        };

        let history = GameHistory::from_stored(stored);
        assert_eq!(history.recent_games().len(), RECENT_GAMES_CAP);
        assert_eq!(history.leaderboard().len(), LEADERBOARD_CAP);
    }

    #[test]
    fn test_stored_round_trip_preserves_order() {
        let mut history = GameHistory::default();
        history.record(summary(0, 6, true));
        history.record(summary(1, 2, true));

        let rebuilt = GameHistory::from_stored(history.to_stored());
        assert_eq!(rebuilt.recent_games(), history.recent_games());
        assert_eq!(rebuilt.leaderboard(), history.leaderboard());
    }
}
