use crate::{CodeGenerator, ScoringEngine};
use game_types::{
    CodeMode, GameError, GameSummary, Guess, GuessRecord, SecretCode, SessionId, SessionStatus,
};
use std::collections::HashMap;
use std::time::{Duration, SystemTime};
use tracing::{debug, info};
use uuid::Uuid;

/// One in-progress game: a secret code, an attempt budget, and the guesses
/// made so far.
#[derive(Debug)]
pub struct GameSession {
    pub id: SessionId,
    pub secret: SecretCode, // hidden from players until the game ends
    pub attempts: u32,
    pub max_attempts: u32,
    pub history: Vec<GuessRecord>,
    pub status: SessionStatus,
    pub created_at: SystemTime,
}

impl GameSession {
    pub fn new(id: SessionId, secret: SecretCode, max_attempts: u32) -> Self {
        Self {
            id,
            secret,
            attempts: 0,
            max_attempts,
            history: Vec::new(),
            status: SessionStatus::Active,
            created_at: SystemTime::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed().unwrap_or(Duration::ZERO) > ttl
    }

    /// Apply an already-validated guess: bump the attempt counter, score it,
    /// append the record, and recompute the session status.
    pub fn apply_guess(&mut self, guess: &Guess) -> GuessRecord {
        self.attempts += 1;
        let score = ScoringEngine::evaluate(&self.secret, guess);
        let record = GuessRecord {
            guess: guess.to_string(),
            score,
            feedback: score.feedback(),
            attempt: self.attempts,
        };
        self.history.push(record.clone());

        self.status = if score.is_win() {
            SessionStatus::Won
        } else if self.attempts >= self.max_attempts {
            SessionStatus::Lost
        } else {
            SessionStatus::Active
        };

        record
    }

    /// Convert a finished session into its terminal snapshot.
    pub fn into_summary(self, player: &str) -> GameSummary {
        GameSummary {
            player: player.to_string(),
            attempts: self.attempts,
            won: self.status == SessionStatus::Won,
            secret_code: self.secret.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            elapsed_seconds: self
                .created_at
                .elapsed()
                .unwrap_or(Duration::ZERO)
                .as_secs(),
            guesses: self.history,
        }
    }
}

/// Outcome of one accepted guess.
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub record: GuessRecord,
    pub status: SessionStatus,
    /// Revealed only when this guess ended the game.
    pub secret_code: Option<String>,
    /// Terminal snapshot, present only when this guess ended the game.
    pub summary: Option<GameSummary>,
}

/// Owns the live session set. Terminal sessions are removed the moment they
/// transition, so everything in the map is playable.
pub struct SessionManager {
    pub sessions: HashMap<SessionId, GameSession>,
    pub generator: CodeGenerator,
    pub max_attempts: u32,
    pub session_ttl: Duration,
}

impl SessionManager {
    pub fn new(mode: CodeMode, max_attempts: u32, session_ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            generator: CodeGenerator::new(mode),
            max_attempts,
            session_ttl,
        }
    }

    /// Start a new session with a fresh secret. Expired sessions are swept
    /// first so abandoned games cannot accumulate.
    pub fn create(&mut self) -> SessionId {
        self.sweep_expired();

        let id = Uuid::new_v4();
        let secret = self.generator.generate(&mut rand::thread_rng());
        self.sessions
            .insert(id, GameSession::new(id, secret, self.max_attempts));
        debug!(session_id = %id, "Created game session");
        id
    }

    /// Drop sessions idle past the expiry threshold. Returns how many were
    /// removed.
    pub fn sweep_expired(&mut self) -> usize {
        let ttl = self.session_ttl;
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired(ttl));

        let dropped = before - self.sessions.len();
        if dropped > 0 {
            info!(dropped, "Dropped expired game sessions");
        }
        dropped
    }

    /// Validate and apply a guess to a live session.
    ///
    /// Validation failures leave the session untouched. On a terminal
    /// transition the session is removed and its summary (stamped with
    /// `player`) is returned in the outcome.
    pub fn submit_guess(
        &mut self,
        session_id: SessionId,
        raw: &str,
        player: &str,
    ) -> Result<GuessOutcome, GameError> {
        if !self.sessions.contains_key(&session_id) {
            return Err(GameError::NoActiveSession { session_id });
        }

        let guess = self.generator.parse_guess(raw)?;

        let session = self
            .sessions
            .get_mut(&session_id)
            .ok_or(GameError::NoActiveSession { session_id })?;
        let record = session.apply_guess(&guess);
        let status = session.status;

        if status.is_terminal() {
            if let Some(finished) = self.sessions.remove(&session_id) {
                debug!(session_id = %session_id, ?status, attempts = finished.attempts,
                    "Game session finished");
                let secret_code = finished.secret.to_string();
                return Ok(GuessOutcome {
                    record,
                    status,
                    secret_code: Some(secret_code),
                    summary: Some(finished.into_summary(player)),
                });
            }
        }

        Ok(GuessOutcome {
            record,
            status,
            secret_code: None,
            summary: None,
        })
    }
}
