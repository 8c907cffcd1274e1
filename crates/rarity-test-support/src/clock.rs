//! Test clock — deterministic `Clock` implementation for tests.

use chrono::{DateTime, Utc};
use rarity_core::clock::Clock;

/// A clock that always returns a fixed point in time, so time-derived seeds
/// are reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A clock frozen at `millis` milliseconds after the Unix epoch.
    ///
    /// # Panics
    ///
    /// Panics if `millis` is outside chrono's representable range.
    #[must_use]
    pub fn from_unix_millis(millis: i64) -> Self {
        Self(DateTime::from_timestamp_millis(millis).expect("millis within chrono's range"))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
