//! Validated generation request

use crate::catalog::Category;
use crate::error::ValidationError;
use serde::Serialize;

/// Minimum topic length, counted in characters after trimming
pub const MIN_TOPIC_CHARS: usize = 10;

/// A topic + field-of-study pair that passed validation
///
/// The strings are kept exactly as given so history dedup stays exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRequest {
    topic: String,
    category: String,
}

impl ProjectRequest {
    /// Validate and build a request
    ///
    /// # Errors
    /// Returns [`ValidationError::TopicTooShort`] or
    /// [`ValidationError::MissingCategory`] when the input is unusable.
    pub fn new(
        topic: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let topic = topic.into();
        let category = category.into();

        let actual = topic.trim().chars().count();
        if actual < MIN_TOPIC_CHARS {
            return Err(ValidationError::TopicTooShort {
                min: MIN_TOPIC_CHARS,
                actual,
            });
        }
        if category.trim().is_empty() {
            return Err(ValidationError::MissingCategory);
        }

        Ok(Self { topic, category })
    }

    /// Topic as entered
    #[inline]
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Category key as entered
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Catalog category, falling back to [`Category::Default`]
    #[inline]
    #[must_use]
    pub fn resolved_category(&self) -> Category {
        Category::from_key(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_request_unchanged() {
        let request = ProjectRequest::new("  Smart irrigation  ", "engineering").unwrap();
        assert_eq!(request.topic(), "  Smart irrigation  ");
        assert_eq!(request.resolved_category(), Category::Engineering);
    }

    #[test]
    fn short_topic_rejected_after_trim() {
        let err = ProjectRequest::new("   short    ", "law").unwrap_err();
        assert_eq!(err, ValidationError::TopicTooShort { min: 10, actual: 5 });
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(ProjectRequest::new("éééééééééé", "arts").is_ok());
        assert!(ProjectRequest::new("ééééééééé", "arts").is_err());
    }

    #[test]
    fn blank_category_rejected() {
        assert_eq!(
            ProjectRequest::new("Digital storytelling", " ").unwrap_err(),
            ValidationError::MissingCategory
        );
    }

    #[test]
    fn unknown_category_is_allowed() {
        let request = ProjectRequest::new("Quantum gardening", "horticulture").unwrap();
        assert_eq!(request.category(), "horticulture");
        assert_eq!(request.resolved_category(), Category::Default);
    }
}
