//! Error types for request validation

/// Request validation failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Topic is too short to produce a meaningful outline
    #[error("please provide a more detailed project topic (at least {min} characters, got {actual})")]
    TopicTooShort {
        /// Required character count
        min: usize,
        /// Characters supplied, after trimming
        actual: usize,
    },

    /// No field of study given
    #[error("please select a field of study")]
    MissingCategory,
}
