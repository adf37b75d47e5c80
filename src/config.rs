//! Runtime configuration, read once from the environment at startup.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TETRIS_HIGH_SCORE_PATH` | High score JSON file | `high_scores.json` |
//! | `TETRIS_SEED` | Session seed (u64) | time based |
//! | `TETRIS_TICK_MS` | Frame pacing in ms (min 1) | `16` |
//! | `TETRIS_LOG_PATH` | Log file; logging is off when unset | unset |
//! | `TETRIS_LOG` | `error`, `warn`, `info`, `debug` or `trace` | `info` |
//!
//! Malformed values fall back to the default.

use std::path::PathBuf;

use tracing::Level;

use crate::store::DEFAULT_SCORE_FILE;
use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub high_score_path: PathBuf,
    /// `None` means pick one from the clock.
    pub seed: Option<u64>,
    pub tick_ms: u32,
    pub log_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            high_score_path: PathBuf::from(DEFAULT_SCORE_FILE),
            seed: None,
            tick_ms: TICK_MS,
            log_path: None,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let high_score_path = non_empty("TETRIS_HIGH_SCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.high_score_path);
        let seed = non_empty("TETRIS_SEED").and_then(|s| s.parse().ok());
        let tick_ms = non_empty("TETRIS_TICK_MS")
            .and_then(|s| s.parse::<u32>().ok())
            .map(|ms| ms.max(1))
            .unwrap_or(defaults.tick_ms);
        let log_path = non_empty("TETRIS_LOG_PATH").map(PathBuf::from);
        let log_level = non_empty("TETRIS_LOG")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            high_score_path,
            seed,
            tick_ms,
            log_path,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config(&[]), AppConfig::default());
        assert_eq!(config(&[]).high_score_path, PathBuf::from("high_scores.json"));
    }

    #[test]
    fn test_reads_every_variable() {
        let c = config(&[
            ("TETRIS_HIGH_SCORE_PATH", "/tmp/scores.json"),
            ("TETRIS_SEED", "42"),
            ("TETRIS_TICK_MS", "33"),
            ("TETRIS_LOG_PATH", "blocks.log"),
            ("TETRIS_LOG", "debug"),
        ]);
        assert_eq!(c.high_score_path, PathBuf::from("/tmp/scores.json"));
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.tick_ms, 33);
        assert_eq!(c.log_path, Some(PathBuf::from("blocks.log")));
        assert_eq!(c.log_level, Level::DEBUG);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let c = config(&[
            ("TETRIS_SEED", "not-a-number"),
            ("TETRIS_TICK_MS", "0"),
            ("TETRIS_LOG_PATH", "   "),
            ("TETRIS_LOG", "loud"),
        ]);
        assert_eq!(c.seed, None);
        assert_eq!(c.tick_ms, 1);
        assert_eq!(c.log_path, None);
        assert_eq!(c.log_level, Level::INFO);
    }
}
