//! History entry type
//!
//! One recorded `(topic, category, timestamp)` submission. The persisted
//! shape is a JSON object with exactly the fields `topic`, `category` and
//! `timestamp`, the last one an RFC 3339 string with millisecond precision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum topic characters shown by [`HistoryEntry::summary`]
pub const SUMMARY_TOPIC_CHARS: usize = 30;

/// A single recorded submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Free-text project description
    pub topic: String,
    /// Opaque field-of-study tag
    pub category: String,
    /// Instant the entry was recorded
    #[serde(rename = "timestamp", with = "iso_millis")]
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create new entry
    #[inline]
    #[must_use]
    pub fn new(
        topic: impl Into<String>,
        category: impl Into<String>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            topic: topic.into(),
            category: category.into(),
            recorded_at,
        }
    }

    /// Check whether this entry holds the given `(topic, category)` pair
    ///
    /// Exact, case-sensitive comparison with no trimming.
    #[inline]
    #[must_use]
    pub fn matches(&self, topic: &str, category: &str) -> bool {
        self.topic == topic && self.category == category
    }

    /// One-line sidebar rendering: truncated topic, then `category - date`
    #[must_use]
    pub fn summary(&self) -> String {
        let mut topic: String = self.topic.chars().take(SUMMARY_TOPIC_CHARS).collect();
        if self.topic.chars().count() > SUMMARY_TOPIC_CHARS {
            topic.push_str("...");
        }
        format!(
            "{topic}\n  {} - {}",
            self.category,
            self.recorded_at.format("%Y-%m-%d")
        )
    }
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        at: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|at| at.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    #[test]
    fn serializes_with_timestamp_field() {
        let entry = HistoryEntry::new("Solar micro-grids", "engineering", at(1_700_000_000));
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "topic": "Solar micro-grids",
                "category": "engineering",
                "timestamp": "2023-11-14T22:13:20.000Z",
            })
        );
    }

    #[test]
    fn accepts_offset_timestamps() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{"topic":"t","category":"c","timestamp":"2023-11-14T23:13:20.000+01:00"}"#,
        )
        .unwrap();
        assert_eq!(entry.recorded_at, at(1_700_000_000));
    }

    #[test]
    fn rejects_non_iso_timestamp() {
        let res: Result<HistoryEntry, _> =
            serde_json::from_str(r#"{"topic":"t","category":"c","timestamp":"yesterday"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn matches_is_exact() {
        let entry = HistoryEntry::new("Topic", "law", at(0));
        assert!(entry.matches("Topic", "law"));
        assert!(!entry.matches("topic", "law"));
        assert!(!entry.matches("Topic ", "law"));
        assert!(!entry.matches("Topic", "Law"));
    }

    #[test]
    fn summary_truncates_long_topics() {
        let entry = HistoryEntry::new(
            "Machine learning for early detection of crop disease",
            "science",
            at(1_700_000_000),
        );
        assert_eq!(
            entry.summary(),
            "Machine learning for early det...\n  science - 2023-11-14"
        );

        let short = HistoryEntry::new("Short topic", "arts", at(0));
        assert_eq!(short.summary(), "Short topic\n  arts - 1970-01-01");
    }
}
