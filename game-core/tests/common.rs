use anyhow::Result;
use game_core::{GameConfig, GameService, HistoryStore, StoredHistory};
use game_types::{CodeMode, SessionId};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Shared-memory store so tests can inspect what was persisted.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub state: Arc<Mutex<StoredHistory>>,
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<StoredHistory> {
        Ok(self.state.lock().unwrap().clone())
    }

    fn save(&self, history: &StoredHistory) -> Result<()> {
        *self.state.lock().unwrap() = history.clone();
        Ok(())
    }
}

pub fn create_test_service(mode: CodeMode) -> GameService {
    let config = GameConfig {
        mode,
        max_attempts: 10,
        session_ttl: Duration::from_secs(3600),
    };
    GameService::new(config, Box::new(MemoryStore::default()))
}

/// Read the hidden code of a live session so tests can script the outcome.
pub fn peek_secret(service: &GameService, session_id: SessionId) -> String {
    service.sessions.sessions[&session_id].secret.to_string()
}

/// A guess guaranteed not to win: the secret with its first digit changed.
pub fn losing_guess(service: &GameService, session_id: SessionId) -> String {
    let mut digits = *service.sessions.sessions[&session_id].secret.digits();
    digits[0] = (digits[0] + 1) % 10;
    digits.iter().map(|d| d.to_string()).collect()
}
