//! Bounded, deduplicated, most-recent-first list
//!
//! [`HistoryList`] holds the in-memory form of the persisted slot and owns the
//! three list invariants:
//! - no two entries share a `(topic, category)` pair
//! - length never exceeds the configured bound
//! - order is recency of insertion, never timestamp value

use crate::entry::HistoryEntry;
use serde::{Deserialize, Serialize};

/// Ordered sequence of entries, index 0 being the most recently recorded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryList {
    entries: Vec<HistoryEntry>,
}

impl HistoryList {
    /// Create empty list
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry at the front
    ///
    /// Any entry with the same `(topic, category)` pair is dropped first, then
    /// the tail is evicted down to `max_items`.
    pub fn insert_recent(&mut self, entry: HistoryEntry, max_items: usize) {
        self.entries
            .retain(|existing| !existing.matches(&entry.topic, &entry.category));
        self.entries.insert(0, entry);
        self.entries.truncate(max_items);
    }

    /// Restore the list invariants on data read back from a slot
    ///
    /// Keeps the first (most recent) entry of each `(topic, category)` pair and
    /// cuts the tail at `max_items`. Order is otherwise untouched.
    pub fn enforce(&mut self, max_items: usize) {
        let mut kept: Vec<HistoryEntry> = Vec::with_capacity(self.entries.len().min(max_items));
        for entry in self.entries.drain(..) {
            if kept.len() == max_items {
                break;
            }
            if !kept.iter().any(|k| k.matches(&entry.topic, &entry.category)) {
                kept.push(entry);
            }
        }
        self.entries = kept;
    }

    /// Get entry by position
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Iterate most-recent-first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if list is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow entries as a slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Take ownership of the entries
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<HistoryEntry> {
        self.entries
    }
}

impl From<Vec<HistoryEntry>> for HistoryList {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for HistoryList {
    type Item = HistoryEntry;
    type IntoIter = std::vec::IntoIter<HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    fn pairs(list: &HistoryList) -> Vec<(&str, &str)> {
        list.iter()
            .map(|e| (e.topic.as_str(), e.category.as_str()))
            .collect()
    }

    #[test]
    fn duplicate_moves_to_front() {
        let mut list = HistoryList::new();
        list.insert_recent(HistoryEntry::new("A", "x", at(1)), 5);
        list.insert_recent(HistoryEntry::new("B", "y", at(2)), 5);
        list.insert_recent(HistoryEntry::new("A", "x", at(3)), 5);

        assert_eq!(pairs(&list), vec![("A", "x"), ("B", "y")]);
        assert_eq!(list.get(0).unwrap().recorded_at, at(3));
    }

    #[test]
    fn same_topic_different_category_is_distinct() {
        let mut list = HistoryList::new();
        list.insert_recent(HistoryEntry::new("A", "x", at(1)), 5);
        list.insert_recent(HistoryEntry::new("A", "y", at(2)), 5);

        assert_eq!(list.len(), 2);
    }

    #[test]
    fn evicts_oldest_past_bound() {
        let mut list = HistoryList::new();
        for i in 0..4 {
            list.insert_recent(HistoryEntry::new(format!("t{i}"), "c", at(i)), 3);
        }
        assert_eq!(pairs(&list), vec![("t3", "c"), ("t2", "c"), ("t1", "c")]);
    }

    #[test]
    fn clock_rollback_keeps_insertion_order() {
        let mut list = HistoryList::new();
        list.insert_recent(HistoryEntry::new("A", "x", at(100)), 5);
        list.insert_recent(HistoryEntry::new("B", "y", at(200)), 5);
        list.insert_recent(HistoryEntry::new("C", "z", at(50)), 5);

        assert_eq!(pairs(&list), vec![("C", "z"), ("B", "y"), ("A", "x")]);
    }

    #[test]
    fn enforce_drops_stale_duplicates_and_trims() {
        let mut list = HistoryList::from(vec![
            HistoryEntry::new("A", "x", at(5)),
            HistoryEntry::new("B", "y", at(4)),
            HistoryEntry::new("A", "x", at(3)),
            HistoryEntry::new("C", "z", at(2)),
            HistoryEntry::new("D", "w", at(1)),
        ]);
        list.enforce(3);

        assert_eq!(pairs(&list), vec![("A", "x"), ("B", "y"), ("C", "z")]);
        assert_eq!(list.get(0).unwrap().recorded_at, at(5));
    }

    #[test]
    fn zero_bound_keeps_nothing() {
        let mut list = HistoryList::new();
        list.insert_recent(HistoryEntry::new("A", "x", at(1)), 0);
        assert!(list.is_empty());
    }
}
