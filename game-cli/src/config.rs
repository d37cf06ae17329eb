use game_core::{DEFAULT_MAX_ATTEMPTS, DEFAULT_SESSION_TTL, GameConfig};
use game_types::CodeMode;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub history_file: String,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn new() -> Self {
        let mode = match env::var("GAME_MODE").as_deref() {
            Ok("distinct") => CodeMode::Distinct,
            _ => CodeMode::Open,
        };
        let max_attempts = env::var("MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);
        let session_ttl = env::var("SESSION_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_SESSION_TTL);
        let history_file =
            env::var("HISTORY_FILE").unwrap_or_else(|_| "game_history.json".to_string());

        Self {
            game: GameConfig {
                mode,
                max_attempts,
                session_ttl,
            },
            history_file,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
