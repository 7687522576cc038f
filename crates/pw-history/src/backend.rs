//! Key-value storage boundary
//!
//! [`StorageBackend`] is the "get/set/remove string by key" seam the history
//! store is built on. `set` must replace the whole value in one step so a
//! reader never observes a partially written slot.

use crate::error::StorageError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// String slots addressed by key
pub trait StorageBackend: Send + Sync {
    /// Read a slot, `None` if absent
    ///
    /// # Errors
    /// Returns [`StorageError`] if the slot exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace a slot's whole value
    ///
    /// # Errors
    /// Returns [`StorageError`] if the write is refused or fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a slot; deleting an absent slot succeeds
    ///
    /// # Errors
    /// Returns [`StorageError`] if an existing slot cannot be removed.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Arc<B> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory backend
///
/// Optionally enforces a byte quota over the sum of all stored values, the
/// way browser local storage does.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryBackend {
    /// Create unbounded backend
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create backend that rejects writes past `bytes` total
    #[inline]
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            quota: Some(bytes),
        }
    }

    /// Number of occupied slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    /// Check if no slot is occupied
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }

    /// Total bytes currently stored
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.slots.read().values().map(String::len).sum()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.write();

        if let Some(limit) = self.quota {
            let others: usize = slots
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let requested = others + value.len();
            if requested > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    requested,
                    limit,
                });
            }
        }

        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots.write().remove(key);
        Ok(())
    }
}
