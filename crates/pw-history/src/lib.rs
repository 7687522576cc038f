//! ProjectWizard submission history
//!
//! A small, durable record of recent submissions:
//! - [`HistoryStore`]: record / list / clear over one persisted slot
//! - [`HistoryList`]: the dedup + bound + recency invariants
//! - [`StorageBackend`]: injected key-value boundary ([`MemoryBackend`], [`FileBackend`])
//! - [`Clock`]: injected time source for entry timestamps
//!
//! # Example
//!
//! ```rust
//! use pw_history::{HistoryStore, MemoryBackend};
//!
//! # fn example() -> Result<(), pw_history::HistoryError> {
//! let store = HistoryStore::new(MemoryBackend::new());
//!
//! store.record("Urban air quality sensing", "engineering")?;
//! store.record("Telehealth adoption in rural clinics", "medicine")?;
//!
//! let recent = store.list()?;
//! assert_eq!(recent[0].category, "medicine");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod backend;
mod clock;
mod config;
mod entry;
mod error;
mod file;
mod list;
mod store;

// Re-exports
pub use backend::{MemoryBackend, StorageBackend};
pub use clock::{Clock, SystemClock};
pub use config::{HistoryConfig, DEFAULT_HISTORY_KEY, MAX_HISTORY_ITEMS};
pub use entry::{HistoryEntry, SUMMARY_TOPIC_CHARS};
pub use error::{HistoryError, StorageError};
pub use file::FileBackend;
pub use list::HistoryList;
pub use store::HistoryStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
