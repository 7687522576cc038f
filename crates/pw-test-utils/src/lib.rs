//! Testing utilities for ProjectWizard workspace
//!
//! Shared test helpers, fixtures, and fault-injecting backends.

#![allow(missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use parking_lot::Mutex;
use pw_history::{
    Clock, HistoryConfig, HistoryEntry, HistoryStore, MemoryBackend, StorageBackend, StorageError,
};
use std::sync::Arc;

/// Fixed starting instant used across tests: 2024-03-01T09:00:00Z
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn starting_at_fixed() -> Arc<Self> {
        Arc::new(Self::new(fixed_instant()))
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock() = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Which operations a [`FailingBackend`] rejects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailMode {
    /// Reads succeed, `set`/`remove` fail
    Writes,
    /// Every operation fails
    All,
}

/// Backend wrapper that rejects operations with `AccessDenied`
///
/// Failing can be toggled at runtime so a test can populate the slot first.
#[derive(Debug)]
pub struct FailingBackend {
    inner: MemoryBackend,
    mode: Mutex<Option<FailMode>>,
}

impl FailingBackend {
    pub fn new(mode: FailMode) -> Self {
        Self {
            inner: MemoryBackend::new(),
            mode: Mutex::new(Some(mode)),
        }
    }

    pub fn healthy() -> Self {
        Self {
            inner: MemoryBackend::new(),
            mode: Mutex::new(None),
        }
    }

    pub fn fail(&self, mode: FailMode) {
        *self.mode.lock() = Some(mode);
    }

    pub fn recover(&self) {
        *self.mode.lock() = None;
    }

    fn check(&self, key: &str, write: bool) -> Result<(), StorageError> {
        match *self.mode.lock() {
            Some(FailMode::All) => Err(StorageError::AccessDenied(key.to_string())),
            Some(FailMode::Writes) if write => Err(StorageError::AccessDenied(key.to_string())),
            _ => Ok(()),
        }
    }
}

impl StorageBackend for FailingBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check(key, false)?;
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check(key, true)?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check(key, true)?;
        self.inner.remove(key)
    }
}

/// Store over a shared in-memory backend and a manual clock
pub fn memory_store(
    max_items: usize,
) -> (
    HistoryStore<Arc<MemoryBackend>, Arc<ManualClock>>,
    Arc<MemoryBackend>,
    Arc<ManualClock>,
) {
    let backend = Arc::new(MemoryBackend::new());
    let clock = ManualClock::starting_at_fixed();
    let store = HistoryStore::with_config(
        Arc::clone(&backend),
        HistoryConfig::new().with_max_items(max_items),
    )
    .unwrap()
    .with_clock(Arc::clone(&clock));
    (store, backend, clock)
}

pub fn entry(topic: &str, category: &str, at: DateTime<Utc>) -> HistoryEntry {
    HistoryEntry::new(topic, category, at)
}

/// Project `(topic, category)` pairs out of a snapshot
pub fn pairs(entries: &[HistoryEntry]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|e| (e.topic.clone(), e.category.clone()))
        .collect()
}

/// Slot values that must all decode as empty history
pub const CORRUPT_PAYLOADS: &[&str] = &[
    "",
    "not json at all",
    "{",
    "null",
    "42",
    "\"a string\"",
    "true",
    r#"{"topic":"A","category":"x","timestamp":"2024-03-01T09:00:00.000Z"}"#,
    r#"[{"topic":"A","category":"x"}]"#,
    r#"[{"topic":"A","category":"x","timestamp":"last tuesday"}]"#,
    r#"[{"topic":1,"category":"x","timestamp":"2024-03-01T09:00:00.000Z"}]"#,
    r#"[{"topic":"A","category":"x","timestamp":"2024-03-01T09:00:00.000Z"}, 7]"#,
];
