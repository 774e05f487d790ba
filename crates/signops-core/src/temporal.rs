//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC-only timestamp truncated to seconds precision.
//!
//! Department records are written by several UI flows in different locales;
//! storing local offsets would make "when did this stage start" ambiguous
//! when the timeline is rendered. All timestamps are therefore normalized
//! to `YYYY-MM-DDTHH:MM:SSZ` at construction, and strict parsing rejects
//! anything that is not already UTC.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimestampParseError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an ISO8601 string, rejecting non-UTC offsets.
/// - [`Timestamp::parse_lenient()`] — for ingesting drifted stored data,
///   converting any offset to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 string.
    ///
    /// Only timestamps with the `Z` suffix are accepted. Explicit offsets
    /// like `+05:00` — even `+00:00` — are rejected, so a stored timestamp
    /// has exactly one byte representation.
    pub fn parse(s: &str) -> Result<Self, TimestampParseError> {
        if !s.ends_with('Z') {
            return Err(TimestampParseError::NonUtc { input: s.to_string() });
        }
        let dt = DateTime::parse_from_rfc3339(s).map_err(|source| TimestampParseError::Invalid {
            input: s.to_string(),
            source,
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Parse an RFC 3339 string, accepting any offset and converting to UTC.
    ///
    /// Lenient parser for historically-drifted stage data. The result is
    /// still UTC with seconds precision.
    pub fn parse_lenient(s: &str) -> Result<Self, TimestampParseError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|source| TimestampParseError::Invalid {
            input: s.to_string(),
            source,
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-03-01T09:30:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_now_has_no_subseconds() {
        assert_eq!(Timestamp::now().as_datetime().nanosecond(), 0);
    }

    #[test]
    fn test_from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 45).unwrap();
        let ts = Timestamp::from_utc(dt.with_nanosecond(123_456_789).unwrap());
        assert_eq!(ts.to_iso8601(), "2026-03-01T09:30:45Z");
    }

    #[test]
    fn test_parse_z_suffix_accepted() {
        let ts = Timestamp::parse("2026-03-01T09:30:00Z").unwrap();
        assert_eq!(ts.to_iso8601(), "2026-03-01T09:30:00Z");
    }

    #[test]
    fn test_parse_offset_rejected() {
        assert!(Timestamp::parse("2026-03-01T09:30:00+00:00").is_err());
        assert!(Timestamp::parse("2026-03-01T14:30:00+05:00").is_err());
    }

    #[test]
    fn test_parse_invalid_format() {
        assert!(Timestamp::parse("not-a-date").is_err());
        assert!(Timestamp::parse("2026-03-01").is_err());
        assert!(Timestamp::parse("").is_err());
    }

    #[test]
    fn test_parse_lenient_converts_offset() {
        let ts = Timestamp::parse_lenient("2026-03-01T14:30:00+05:00").unwrap();
        assert_eq!(ts.to_iso8601(), "2026-03-01T09:30:00Z");
    }

    #[test]
    fn test_display_matches_iso8601() {
        let ts = Timestamp::parse("2026-03-01T09:30:00Z").unwrap();
        assert_eq!(format!("{ts}"), ts.to_iso8601());
    }

    #[test]
    fn test_ordering() {
        let earlier = Timestamp::parse("2026-03-01T09:30:00Z").unwrap();
        let later = Timestamp::parse("2026-03-01T09:30:01Z").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_serde_roundtrip() {
        let ts = Timestamp::parse("2026-03-01T09:30:00Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }
}
