//! History store over the filesystem backend
//!
//! Uses a temporary directory per test; verifies durability across store
//! instances and the on-disk slot format.

use chrono::Duration;
use pw_history::{FileBackend, HistoryConfig, HistoryStore};
use pw_test_utils::{fixed_instant, pairs, ManualClock};
use std::fs;
use std::sync::Arc;

#[test]
fn history_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let clock = ManualClock::starting_at_fixed();

    {
        let store = HistoryStore::new(FileBackend::new(dir.path())).with_clock(Arc::clone(&clock));
        store.record("Urban heat islands", "science").unwrap();
        clock.advance(Duration::seconds(30));
        store.record("SME digital adoption", "management").unwrap();
    }

    let reopened = HistoryStore::new(FileBackend::new(dir.path()));
    let entries = reopened.list().unwrap();
    assert_eq!(
        pairs(&entries),
        vec![
            ("SME digital adoption".to_string(), "management".to_string()),
            ("Urban heat islands".to_string(), "science".to_string()),
        ]
    );
    assert_eq!(entries[0].recorded_at, fixed_instant() + Duration::seconds(30));
}

#[test]
fn slot_file_holds_plain_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(FileBackend::new(dir.path()))
        .with_clock(ManualClock::starting_at_fixed());

    store.record("Rural telemedicine", "medicine").unwrap();

    let raw = fs::read_to_string(dir.path().join("projectHistory.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "topic": "Rural telemedicine",
            "category": "medicine",
            "timestamp": "2024-03-01T09:00:00.000Z",
        }])
    );
}

#[test]
fn corrupt_file_reads_empty_and_is_replaced_on_record() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("projectHistory.json"), "{\"truncated\": [").unwrap();

    let store = HistoryStore::new(FileBackend::new(dir.path()));
    assert!(store.list().unwrap().is_empty());

    store.record("A", "x").unwrap();
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn non_utf8_file_is_empty_history_and_not_rewritten_mangled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projectHistory.json");
    let mut raw = br#"[{"topic":"Caf"#.to_vec();
    raw.push(0xe9);
    raw.extend_from_slice(br#"","category":"arts","timestamp":"2024-03-01T09:00:00.000Z"}]"#);
    fs::write(&path, raw).unwrap();

    let store = HistoryStore::new(FileBackend::new(dir.path()));
    assert!(store.list().unwrap().is_empty());

    store.record("Glazes", "arts").unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(!written.contains('\u{fffd}'));
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn clear_deletes_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = HistoryConfig::new().with_key("recent-projects");
    let store = HistoryStore::with_config(FileBackend::new(dir.path()), config).unwrap();

    store.record("A", "x").unwrap();
    let path = dir.path().join("recent-projects.json");
    assert!(path.exists());

    store.clear().unwrap();
    assert!(!path.exists());
    store.clear().unwrap();
}

#[test]
fn missing_directory_is_created_on_first_write() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a/b/c");
    let store = HistoryStore::new(FileBackend::new(&nested));

    assert!(store.list().unwrap().is_empty());
    assert!(!nested.exists());

    store.record("A", "x").unwrap();
    assert!(nested.join("projectHistory.json").is_file());
}
