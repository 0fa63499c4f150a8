//! UTC instants.
//!
//! Expiry arithmetic works in whole 24-hour days from the creation instant,
//! never in calendar days, so DST and month lengths play no part.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Wall-clock time. Handlers take time from the `Clock` port instead.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Negative when `other` is later.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    pub fn add_days(&self, days: i64) -> Self {
        self.plus(Duration::days(days))
    }

    pub fn plus(&self, duration: Duration) -> Self {
        Self(self.0 + duration)
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    fn fixed() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, 9, 10, 30, 0).unwrap())
    }

    #[test]
    fn add_days_is_exactly_24_hours_each() {
        let later = fixed().add_days(3);
        assert_eq!(later.as_datetime().day(), 12);
        assert_eq!(later.duration_since(&fixed()), Duration::hours(72));
        assert_eq!(fixed().duration_since(&later), Duration::hours(-72));
    }

    #[test]
    fn ordering_is_strict() {
        let earlier = fixed();
        let later = earlier.plus(Duration::seconds(1));

        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
        assert!(!earlier.is_after(&earlier));
        assert!(!earlier.is_before(&earlier));
    }

    #[test]
    fn serializes_as_rfc3339_string() {
        let json = serde_json::to_string(&fixed()).unwrap();
        assert_eq!(json, "\"2024-03-09T10:30:00Z\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fixed());
    }
}
