//! Simulated outline generation
//!
//! Looks the outline up in the static catalog after an artificial delay that
//! stands in for a real generation service.

use crate::outline::ProjectOutline;
use crate::request::ProjectRequest;
use std::time::Duration;

/// Default simulated processing time
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2500);

/// Outline generator
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    delay: Duration,
}

impl Generator {
    /// Create generator with the given simulated delay
    #[inline]
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Create generator that answers immediately
    #[inline]
    #[must_use]
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Simulated delay
    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Produce the outline for a request
    pub async fn generate(&self, request: &ProjectRequest) -> ProjectOutline {
        tracing::debug!(
            topic = request.topic(),
            category = request.category(),
            delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX),
            "generating outline"
        );
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        ProjectOutline::personalize(request)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}
