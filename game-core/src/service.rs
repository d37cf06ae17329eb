use crate::{GameHistory, HistoryStore, SessionManager};
use game_types::{
    CodeMode, GameError, GuessResponse, NewGameResponse, SessionId, SessionStatus,
};
use std::time::Duration;
use tracing::warn;

pub const MAX_PLAYER_NAME_LEN: usize = 20;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub mode: CodeMode,
    pub max_attempts: u32,
    pub session_ttl: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: CodeMode::Open,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            session_ttl: DEFAULT_SESSION_TTL,
        }
    }
}

/// The facade presentation layers talk to: sessions, history, and the
/// persistence port behind one synchronous API. Callers embedding this in a
/// concurrent server must serialize access themselves.
pub struct GameService {
    pub sessions: SessionManager,
    pub history: GameHistory,
    store: Box<dyn HistoryStore>,
    player_name: String,
}

impl GameService {
    /// A failed history load is not fatal: play starts with empty lists and
    /// the next save will recreate the file.
    pub fn new(config: GameConfig, store: Box<dyn HistoryStore>) -> Self {
        let history = match store.load() {
            Ok(stored) => GameHistory::from_stored(stored),
            Err(e) => {
                warn!("Failed to load game history: {:#}", e);
                GameHistory::default()
            }
        };

        Self {
            sessions: SessionManager::new(config.mode, config.max_attempts, config.session_ttl),
            history,
            store,
            player_name: "Anonymous".to_string(),
        }
    }

    pub fn new_game(&mut self) -> NewGameResponse {
        let session_id = self.sessions.create();
        NewGameResponse {
            session_id,
            recent_games: self.history.recent_games().to_vec(),
            leaderboard: self.history.leaderboard().to_vec(),
        }
    }

    /// Submit a guess for a live session. On a terminal transition the
    /// summary is recorded and persisted; a save failure is logged and play
    /// continues from memory.
    pub fn guess(&mut self, session_id: SessionId, raw: &str) -> Result<GuessResponse, GameError> {
        let outcome = self
            .sessions
            .submit_guess(session_id, raw, &self.player_name)?;

        let over = outcome.status.is_terminal();
        let won = outcome.status == SessionStatus::Won;

        let recent_games = match outcome.summary {
            Some(summary) => {
                self.history.record(summary);
                if let Err(e) = self.store.save(&self.history.to_stored()) {
                    warn!("Failed to save game history: {:#}", e);
                }
                Some(self.history.recent_games().to_vec())
            }
            None => None,
        };

        Ok(GuessResponse {
            guess: outcome.record.guess,
            feedback: outcome.record.feedback,
            score: outcome.record.score,
            attempt: outcome.record.attempt,
            over,
            won,
            secret_code: outcome.secret_code,
            recent_games,
        })
    }

    pub fn set_player_name(&mut self, name: &str) -> Result<(), GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        if name.chars().count() > MAX_PLAYER_NAME_LEN {
            return Err(GameError::PlayerNameTooLong {
                max: MAX_PLAYER_NAME_LEN,
            });
        }
        self.player_name = name.to_string();
        Ok(())
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }
}
