//! Shared-store writers
//!
//! Run with: cargo test --package pw-history --test concurrency

use pw_history::{FileBackend, HistoryConfig, HistoryStore, MemoryBackend, StorageBackend};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const PER_THREAD: usize = 16;

fn hammer<B: StorageBackend + 'static>(store: Arc<HistoryStore<B>>) {
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    store.record(&format!("topic {i}"), &format!("thread-{t}")).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn concurrent_records_are_not_lost() {
    let total = THREADS * PER_THREAD;
    let config = HistoryConfig::new().with_max_items(total);
    let store = Arc::new(HistoryStore::with_config(MemoryBackend::new(), config).unwrap());

    hammer(Arc::clone(&store));

    let entries = store.list().unwrap();
    assert_eq!(entries.len(), total);

    let unique: HashSet<_> = entries
        .iter()
        .map(|e| (e.topic.clone(), e.category.clone()))
        .collect();
    assert_eq!(unique.len(), total);
}

#[test]
fn concurrent_records_respect_bound() {
    let store = Arc::new(HistoryStore::new(MemoryBackend::new()));

    hammer(Arc::clone(&store));

    let entries = store.list().unwrap();
    assert_eq!(entries.len(), 5);
    // Every thread's last write lands at some point; the final head is one of them
    assert_eq!(entries[0].topic, format!("topic {}", PER_THREAD - 1));
}

#[test]
fn concurrent_records_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let total = THREADS * PER_THREAD;
    let config = HistoryConfig::new().with_max_items(total);
    let store = Arc::new(HistoryStore::with_config(FileBackend::new(dir.path()), config).unwrap());

    hammer(Arc::clone(&store));

    assert_eq!(store.list().unwrap().len(), total);
}
