//! High score file tests - load, save, and degraded I/O

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tui_blocks::core::ScoreStore;
use tui_blocks::store::{JsonFileScoreStore, ScoreFile};
use tui_blocks::types::Difficulty;

fn unique_temp_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("tui_blocks_scores_{tag}_{nanos}.json"))
}

#[test]
fn test_missing_file_starts_at_zero() {
    let path = unique_temp_path("missing");
    let store = JsonFileScoreStore::open(&path);
    for d in Difficulty::ALL {
        assert_eq!(store.best(d), 0);
    }
    assert!(!path.exists());
}

#[test]
fn test_record_persists_and_reloads() {
    let path = unique_temp_path("reload");
    let mut store = JsonFileScoreStore::open(&path);
    assert!(store.record(Difficulty::Medium, 900));
    assert!(path.exists());

    let raw = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json, serde_json::json!({"easy": 0, "medium": 900, "hard": 0}));

    let reopened = JsonFileScoreStore::open(&path);
    assert_eq!(reopened.best(Difficulty::Medium), 900);
    assert_eq!(reopened.score_file(), ScoreFile::from_bests([0, 900, 0]));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_non_record_does_not_write() {
    let path = unique_temp_path("norecord");
    fs::write(&path, r#"{"easy": 50, "medium": 0, "hard": 0}"#).unwrap();

    let mut store = JsonFileScoreStore::open(&path);
    assert_eq!(store.best(Difficulty::Easy), 50);
    assert!(!store.record(Difficulty::Easy, 50));
    assert!(!store.record(Difficulty::Easy, 10));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"{"easy": 50, "medium": 0, "hard": 0}"#
    );

    let _ = fs::remove_file(&path);
}

#[test]
fn test_corrupt_file_degrades_to_zero() {
    let path = unique_temp_path("corrupt");
    fs::write(&path, "{ not json").unwrap();

    let mut store = JsonFileScoreStore::open(&path);
    assert_eq!(store.best(Difficulty::Hard), 0);

    // The next record overwrites the corrupt file with a valid one.
    assert!(store.record(Difficulty::Hard, 10));
    assert_eq!(JsonFileScoreStore::open(&path).best(Difficulty::Hard), 10);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_partial_file_fills_missing_keys() {
    let path = unique_temp_path("partial");
    fs::write(&path, r#"{"hard": 77, "extra": true}"#).unwrap();

    let store = JsonFileScoreStore::open(&path);
    assert_eq!(store.score_file().bests(), [0, 0, 77]);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_unwritable_path_keeps_best_in_memory() {
    let dir = unique_temp_path("nodir");
    let path = dir.join("nested").join("scores.json");

    let mut store = JsonFileScoreStore::open(&path);
    assert!(store.record(Difficulty::Easy, 300));
    assert_eq!(store.best(Difficulty::Easy), 300);
    assert!(store.save().is_err());
    assert!(!path.exists());
}
