//! History store
//!
//! [`HistoryStore`] owns one slot in an injected [`StorageBackend`] and keeps
//! a [`HistoryList`] in it. `record` and `clear` serialize through a mutex so
//! concurrent writers sharing one store never lose an entry to an interleaved
//! load/persist. Readers go straight to the backend; whole-value writes mean
//! they only ever see a completed list.

use crate::backend::StorageBackend;
use crate::clock::{Clock, SystemClock};
use crate::config::HistoryConfig;
use crate::entry::HistoryEntry;
use crate::error::HistoryError;
use crate::list::HistoryList;
use parking_lot::Mutex;

/// Bounded, deduplicated, most-recent-first submission history
#[derive(Debug)]
pub struct HistoryStore<B, C = SystemClock> {
    backend: B,
    clock: C,
    config: HistoryConfig,
    write_lock: Mutex<()>,
}

impl<B: StorageBackend> HistoryStore<B> {
    /// Create store with default configuration and the wall clock
    #[inline]
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            clock: SystemClock,
            config: HistoryConfig::default(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create store with explicit configuration
    ///
    /// # Errors
    /// Returns [`HistoryError::InvalidConfig`] if `config` fails validation.
    pub fn with_config(backend: B, config: HistoryConfig) -> Result<Self, HistoryError> {
        config.validate()?;
        Ok(Self {
            backend,
            clock: SystemClock,
            config,
            write_lock: Mutex::new(()),
        })
    }
}

impl<B: StorageBackend, C: Clock> HistoryStore<B, C> {
    /// Replace the time source
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> HistoryStore<B, C2> {
        HistoryStore {
            backend: self.backend,
            clock,
            config: self.config,
            write_lock: self.write_lock,
        }
    }

    /// Store configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Underlying backend
    #[inline]
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Record a submission at the front of the history
    ///
    /// Drops any earlier entry with the same `(topic, category)`, evicts past
    /// the bound, and persists the result with a single write.
    ///
    /// # Errors
    /// Returns [`HistoryError::Storage`] if the backend rejects the read or
    /// the write. Nothing is retried.
    pub fn record(&self, topic: &str, category: &str) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock();

        let entry = HistoryEntry::new(topic, category, self.clock.now());
        let mut list = self.load()?;
        list.insert_recent(entry, self.config.max_items);
        self.persist(&list)?;

        tracing::debug!(
            key = %self.config.key,
            topic,
            category,
            len = list.len(),
            "recorded history entry"
        );
        Ok(())
    }

    /// Snapshot of the history, most recent first
    ///
    /// An absent slot, or one that does not decode as a list of entries, is
    /// empty history.
    ///
    /// # Errors
    /// Returns [`HistoryError::Storage`] if the backend read fails.
    pub fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.load()?.into_vec())
    }

    /// Entry at `index` in the current snapshot
    ///
    /// # Errors
    /// Returns [`HistoryError::Storage`] if the backend read fails.
    pub fn get(&self, index: usize) -> Result<Option<HistoryEntry>, HistoryError> {
        Ok(self.load()?.get(index).cloned())
    }

    /// Delete the slot; clearing an empty store succeeds
    ///
    /// # Errors
    /// Returns [`HistoryError::Storage`] if the backend rejects the removal.
    pub fn clear(&self) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock();
        self.backend.remove(&self.config.key)?;
        tracing::debug!(key = %self.config.key, "cleared history");
        Ok(())
    }

    fn load(&self) -> Result<HistoryList, HistoryError> {
        let Some(raw) = self.backend.get(&self.config.key)? else {
            return Ok(HistoryList::new());
        };

        match serde_json::from_str::<HistoryList>(&raw) {
            Ok(mut list) => {
                // Slot may predate a lower bound or have been written elsewhere
                list.enforce(self.config.max_items);
                Ok(list)
            }
            Err(e) => {
                tracing::warn!(
                    key = %self.config.key,
                    error = %e,
                    "persisted history is malformed, treating as empty"
                );
                Ok(HistoryList::new())
            }
        }
    }

    fn persist(&self, list: &HistoryList) -> Result<(), HistoryError> {
        let raw = serde_json::to_string(list).map_err(HistoryError::Encode)?;
        self.backend.set(&self.config.key, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::error::StorageError;
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    struct StepClock(AtomicI64);

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Utc> {
            let secs = self.0.fetch_add(1, Ordering::SeqCst);
            Utc.timestamp_opt(secs, 0).single().unwrap()
        }
    }

    fn store() -> HistoryStore<Arc<MemoryBackend>, StepClock> {
        HistoryStore::new(Arc::new(MemoryBackend::new()))
            .with_clock(StepClock(AtomicI64::new(1_000)))
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = store();
        assert!(store.list().unwrap().is_empty());
        assert!(store.backend().is_empty());
    }

    #[test]
    fn record_writes_json_array() {
        let store = store();
        store.record("Solar desalination", "engineering").unwrap();

        let raw = store.backend().get("projectHistory").unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"topic":"Solar desalination","category":"engineering","timestamp":"1970-01-01T00:16:40.000Z"}]"#
        );
    }

    #[test]
    fn list_does_not_write() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set("projectHistory", "not json").unwrap();
        let store = HistoryStore::new(Arc::clone(&backend));

        assert!(store.list().unwrap().is_empty());
        assert_eq!(
            backend.get("projectHistory").unwrap().as_deref(),
            Some("not json")
        );
    }

    #[test]
    fn record_over_corrupt_slot_starts_fresh() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set("projectHistory", r#"{"topic":"x"}"#).unwrap();
        let store = HistoryStore::new(Arc::clone(&backend));

        store.record("A", "x").unwrap();
        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].matches("A", "x"));
    }

    #[test]
    fn custom_key_and_bound() {
        let backend = Arc::new(MemoryBackend::new());
        let config = HistoryConfig::new().with_key("recent").with_max_items(2);
        let store = HistoryStore::with_config(Arc::clone(&backend), config).unwrap();

        for topic in ["a", "b", "c"] {
            store.record(topic, "c").unwrap();
        }
        assert_eq!(store.list().unwrap().len(), 2);
        assert!(backend.get("projectHistory").unwrap().is_none());
        assert!(backend.get("recent").unwrap().is_some());
    }

    #[test]
    fn with_config_rejects_zero_bound() {
        let res = HistoryStore::with_config(
            MemoryBackend::new(),
            HistoryConfig::new().with_max_items(0),
        );
        assert!(matches!(res, Err(HistoryError::InvalidConfig(_))));
    }

    #[test]
    fn quota_failure_propagates_and_keeps_previous_list() {
        let store = HistoryStore::new(MemoryBackend::with_quota(120));
        store.record("A", "x").unwrap();

        let err = store.record(&"long topic ".repeat(20), "x").unwrap_err();
        assert!(matches!(
            err,
            HistoryError::Storage(StorageError::QuotaExceeded { .. })
        ));

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].matches("A", "x"));
    }

    #[test]
    fn lowered_bound_applies_to_existing_slot() {
        let backend = Arc::new(MemoryBackend::new());
        let wide = HistoryStore::new(Arc::clone(&backend));
        for topic in ["t0", "t1", "t2", "t3", "t4"] {
            wide.record(topic, "c").unwrap();
        }

        let narrow = HistoryStore::with_config(
            Arc::clone(&backend),
            HistoryConfig::new().with_max_items(2),
        )
        .unwrap();
        let entries = narrow.list().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].matches("t4", "c"));
        assert!(entries[1].matches("t3", "c"));
        assert!(narrow.get(2).unwrap().is_none());

        // Reads never rewrite the slot
        assert_eq!(wide.list().unwrap().len(), 5);
    }

    #[test]
    fn duplicate_pairs_in_slot_collapse_on_read() {
        let backend = Arc::new(MemoryBackend::new());
        backend
            .set(
                "projectHistory",
                r#"[{"topic":"A","category":"x","timestamp":"2024-03-01T09:00:02.000Z"},
                    {"topic":"A","category":"x","timestamp":"2024-03-01T09:00:01.000Z"}]"#,
            )
            .unwrap();
        let store = HistoryStore::new(Arc::clone(&backend));

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].recorded_at.timestamp() % 60, 2);
    }

    #[test]
    fn get_by_index() {
        let store = store();
        store.record("A", "x").unwrap();
        store.record("B", "y").unwrap();

        assert!(store.get(0).unwrap().unwrap().matches("B", "y"));
        assert!(store.get(1).unwrap().unwrap().matches("A", "x"));
        assert!(store.get(2).unwrap().is_none());
    }
}
