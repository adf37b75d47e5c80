//! Score persistence module.
//!
//! Best scores live in a small JSON object keyed by difficulty:
//!
//! ```json
//! {
//!   "easy": 1200,
//!   "medium": 300,
//!   "hard": 0
//! }
//! ```
//!
//! Persistence is best effort. A missing or corrupt file starts the session with
//! zero bests, and a failed write keeps the new best in memory for the rest of the
//! session. Neither case is fatal.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tui_blocks_core::{MemoryScoreStore, ScoreStore};
use tui_blocks_types::{Difficulty, DIFFICULTY_COUNT};

pub use tui_blocks_core as core;

/// Default file name, relative to the working directory.
pub const DEFAULT_SCORE_FILE: &str = "high_scores.json";

/// On-disk layout. Missing keys read as 0, unknown keys are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreFile {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl ScoreFile {
    pub fn from_bests(best: [u32; DIFFICULTY_COUNT]) -> Self {
        let [easy, medium, hard] = best;
        Self { easy, medium, hard }
    }

    /// Bests ordered as [`Difficulty::ALL`].
    pub fn bests(&self) -> [u32; DIFFICULTY_COUNT] {
        [self.easy, self.medium, self.hard]
    }
}

/// [`ScoreStore`] backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileScoreStore {
    path: PathBuf,
    scores: MemoryScoreStore,
}

impl JsonFileScoreStore {
    /// Load bests from `path`, falling back to zeros if the file cannot be used.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = match read_score_file(&path) {
            Ok(Some(file)) => {
                debug!(path = %path.display(), "loaded high scores");
                file
            }
            Ok(None) => {
                debug!(path = %path.display(), "no high score file yet");
                ScoreFile::default()
            }
            Err(err) => {
                warn!(path = %path.display(), error = %format!("{err:#}"), "ignoring unreadable high score file");
                ScoreFile::default()
            }
        };

        Self {
            path,
            scores: MemoryScoreStore::with_bests(file.bests()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn score_file(&self) -> ScoreFile {
        ScoreFile::from_bests(self.scores.bests())
    }

    /// Write the current bests as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.score_file())
            .context("serialize high scores")?;
        fs::write(&self.path, json)
            .with_context(|| format!("write high scores to {}", self.path.display()))?;
        Ok(())
    }
}

fn read_score_file(path: &Path) -> Result<Option<ScoreFile>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("read {}", path.display()));
        }
    };
    let file = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(Some(file))
}

impl ScoreStore for JsonFileScoreStore {
    fn best(&self, difficulty: Difficulty) -> u32 {
        self.scores.best(difficulty)
    }

    fn record(&mut self, difficulty: Difficulty, score: u32) -> bool {
        if !self.scores.record(difficulty, score) {
            return false;
        }
        if let Err(err) = self.save() {
            warn!(difficulty = difficulty.as_str(), score, error = %format!("{err:#}"), "failed to persist high score");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_file_tolerates_missing_and_unknown_keys() {
        let file: ScoreFile = serde_json::from_str(r#"{"easy": 5, "insane": 9}"#).unwrap();
        assert_eq!(file.bests(), [5, 0, 0]);
    }

    #[test]
    fn test_score_file_rejects_negative_scores() {
        assert!(serde_json::from_str::<ScoreFile>(r#"{"easy": -1}"#).is_err());
    }

    #[test]
    fn test_score_file_serializes_difficulty_keys() {
        let json = serde_json::to_value(ScoreFile::from_bests([1, 2, 3])).unwrap();
        assert_eq!(json, serde_json::json!({"easy": 1, "medium": 2, "hard": 3}));
    }
}
