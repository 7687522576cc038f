//! Error types for the history store
//!
//! Two layers:
//! - [`StorageError`]: failures reported by a [`StorageBackend`](crate::StorageBackend)
//! - [`HistoryError`]: failures surfaced by [`HistoryStore`](crate::HistoryStore) operations
//!
//! A malformed persisted slot is deliberately absent from both: it is
//! recovered as empty history inside the store and never reaches callers.

/// Errors reported by a key-value storage backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying I/O failure
    #[error("io error on slot '{key}': {source}")]
    Io {
        /// Slot being accessed
        key: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The backend refused access to the slot
    #[error("access denied for slot '{0}'")]
    AccessDenied(String),

    /// Writing the value would exceed the backend's capacity
    #[error("quota exceeded writing slot '{key}': {requested} bytes requested, {limit} allowed")]
    QuotaExceeded {
        /// Slot being written
        key: String,
        /// Bytes the write needed
        requested: usize,
        /// Bytes the backend allows
        limit: usize,
    },

    /// Key cannot be mapped onto the backend
    #[error("invalid slot key: '{0}'")]
    InvalidKey(String),

    /// Backend temporarily unavailable
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Create IO error for key
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }

    /// Map an I/O error, promoting permission failures to [`StorageError::AccessDenied`]
    pub fn from_io(key: impl Into<String>, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::AccessDenied(key.into()),
            _ => Self::io(key, source),
        }
    }

    /// Check if the failure may clear up on its own
    ///
    /// The store never retries; this is for callers that want to.
    #[inline]
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Unavailable(_) => true,
            Self::Io { source, .. } => matches!(
                source.kind(),
                std::io::ErrorKind::Interrupted
                    | std::io::ErrorKind::WouldBlock
                    | std::io::ErrorKind::TimedOut
            ),
            Self::AccessDenied(_) | Self::QuotaExceeded { .. } | Self::InvalidKey(_) => false,
        }
    }
}

/// Errors surfaced by history store operations
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// Persistence layer rejected a read or write
    #[error("history storage failed: {0}")]
    Storage(#[from] StorageError),

    /// The outgoing list could not be encoded
    #[error("failed to encode history: {0}")]
    Encode(#[source] serde_json::Error),

    /// Store configuration is unusable
    #[error("invalid history configuration: {0}")]
    InvalidConfig(String),
}

impl HistoryError {
    /// Check if this error came from the storage boundary
    #[inline]
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Check if retrying the same operation could succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            Self::Encode(_) | Self::InvalidConfig(_) => false,
        }
    }
}
