//! Tests for the Index Snapshot
//!
//! These tests verify:
//! - Load of a missing snapshot
//! - Persist → load round-trip
//! - Wholesale overwrite on persist
//! - InvalidSnapshot on unparsable content

use std::fs;
use std::path::PathBuf;

use logkv::index::{Index, Snapshot};
use logkv::LogKvError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_snapshot() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.db.index.json");
    (temp_dir, path)
}

fn sample_index() -> Index {
    let mut index = Index::new();
    index.record("x", 16);
    index.record("y", 8);
    index.record("with,comma", 0);
    index
}

// =============================================================================
// Load / Persist Tests
// =============================================================================

#[test]
fn test_load_missing_snapshot() {
    let (_temp, path) = setup_temp_snapshot();
    let snapshot = Snapshot::new(&path);

    assert!(!snapshot.exists());
    assert_eq!(snapshot.load().unwrap(), None);
}

#[test]
fn test_persist_then_load() {
    let (_temp, path) = setup_temp_snapshot();
    let snapshot = Snapshot::new(&path);
    let index = sample_index();

    snapshot.persist(&index).unwrap();

    assert!(snapshot.exists());
    assert_eq!(snapshot.load().unwrap(), Some(index));
}

#[test]
fn test_persist_empty_index() {
    let (_temp, path) = setup_temp_snapshot();
    let snapshot = Snapshot::new(&path);

    snapshot.persist(&Index::new()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    assert_eq!(snapshot.load().unwrap(), Some(Index::new()));
}

#[test]
fn test_persist_is_plain_json_object() {
    let (_temp, path) = setup_temp_snapshot();
    let snapshot = Snapshot::new(&path);

    let mut index = Index::new();
    index.record("b", 7);
    index.record("a", 0);
    snapshot.persist(&index).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"a":0,"b":7}"#);
}

#[test]
fn test_persist_overwrites_previous() {
    let (_temp, path) = setup_temp_snapshot();
    let snapshot = Snapshot::new(&path);

    snapshot.persist(&sample_index()).unwrap();

    let mut smaller = Index::new();
    smaller.record("only", 3);
    snapshot.persist(&smaller).unwrap();

    assert_eq!(snapshot.load().unwrap(), Some(smaller));
}

#[test]
fn test_persist_leaves_no_temp_file() {
    let (temp, path) = setup_temp_snapshot();
    let snapshot = Snapshot::new(&path);

    snapshot.persist(&sample_index()).unwrap();

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["test.db.index.json".to_string()]);
}

#[test]
fn test_load_hand_written_snapshot() {
    let (_temp, path) = setup_temp_snapshot();
    fs::write(&path, r#"{ "k1": 0, "k2": 12 }"#).unwrap();

    let index = Snapshot::new(&path).load().unwrap().unwrap();

    assert_eq!(index.lookup("k1"), Some(0));
    assert_eq!(index.lookup("k2"), Some(12));
}

#[test]
fn test_remove_snapshot() {
    let (_temp, path) = setup_temp_snapshot();
    let snapshot = Snapshot::new(&path);
    snapshot.persist(&sample_index()).unwrap();

    snapshot.remove().unwrap();

    assert!(!snapshot.exists());
    assert_eq!(snapshot.load().unwrap(), None);
}

#[test]
fn test_remove_missing_snapshot_is_ok() {
    let (_temp, path) = setup_temp_snapshot();

    Snapshot::new(&path).remove().unwrap();
}

// =============================================================================
// Invalid Snapshot Tests
// =============================================================================

fn assert_invalid(content: &str) {
    let (_temp, path) = setup_temp_snapshot();
    fs::write(&path, content).unwrap();

    let result = Snapshot::new(&path).load();

    assert!(
        matches!(result, Err(LogKvError::InvalidSnapshot(_))),
        "expected InvalidSnapshot for {:?}, got {:?}",
        content,
        result
    );
}

#[test]
fn test_invalid_not_json() {
    assert_invalid("this is not json");
}

#[test]
fn test_invalid_empty_file() {
    assert_invalid("");
}

#[test]
fn test_invalid_array() {
    assert_invalid("[1, 2, 3]");
}

#[test]
fn test_invalid_string_offset() {
    assert_invalid(r#"{"k": "12"}"#);
}

#[test]
fn test_invalid_negative_offset() {
    assert_invalid(r#"{"k": -1}"#);
}

#[test]
fn test_invalid_truncated() {
    assert_invalid(r#"{"k": 1, "j": "#);
}
