use anyhow::{Context, Result};
use game_core::{HistoryStore, StoredHistory};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Flat-file implementation of the history port: one JSON document holding
/// both bounded lists.
///
/// Saves go through a sibling temp file and a rename, so the target either
/// reflects the full update or the previous state, never a partial write.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Result<StoredHistory> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No history file yet, starting empty");
            return Ok(StoredHistory::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("reading history file {}", self.path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing history file {}", self.path.display()))
    }

    fn save(&self, history: &StoredHistory) -> Result<()> {
        let serialized = serde_json::to_string_pretty(history).context("serializing history")?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serialized)
            .with_context(|| format!("writing history file {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("replacing history file {}", self.path.display()))?;

        debug!(path = %self.path.display(), "Saved game history");
        Ok(())
    }
}
