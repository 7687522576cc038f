//! History store configuration

use crate::error::HistoryError;
use serde::{Deserialize, Serialize};

/// Default slot key
pub const DEFAULT_HISTORY_KEY: &str = "projectHistory";

/// Default list bound
pub const MAX_HISTORY_ITEMS: usize = 5;

/// History store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Slot key in the storage backend
    pub key: String,
    /// Maximum number of retained entries
    pub max_items: usize,
}

impl HistoryConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With slot key
    #[inline]
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// With list bound
    #[inline]
    #[must_use]
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Reject configurations the store cannot honour
    ///
    /// # Errors
    /// Returns [`HistoryError::InvalidConfig`] for an empty key or a zero bound.
    pub fn validate(&self) -> Result<(), HistoryError> {
        if self.key.trim().is_empty() {
            return Err(HistoryError::InvalidConfig("key must not be empty".to_string()));
        }
        if self.max_items == 0 {
            return Err(HistoryError::InvalidConfig(
                "max_items must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_HISTORY_KEY.to_string(),
            max_items: MAX_HISTORY_ITEMS,
        }
    }
}
