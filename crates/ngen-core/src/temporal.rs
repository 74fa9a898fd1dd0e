//! # Temporal Types — Flexible Ingest, Canonical Output
//!
//! Defines [`Timestamp`], a UTC timestamp truncated to seconds precision.
//!
//! ## Ingest Leniency
//!
//! The narrative brief is authored by hand, so `meta.timestamp` arrives in
//! whatever ISO-8601 shape the author's tooling produced: a full RFC 3339
//! string with `Z` or an explicit offset, a naive
//! `YYYY-MM-DDTHH:MM:SS[.ffffff]` local time, or a bare date. All of these
//! are accepted by [`Timestamp::parse_flexible`] and normalized to UTC —
//! matching the legacy behavior of `datetime.fromisoformat` with the
//! `Z` → `+00:00` shim. Naive inputs are taken as already-UTC.
//!
//! ## Output Canonicality
//!
//! Generated artifacts render timestamps as `YYYY-MM-DDTHH:MM:SSZ` — no
//! sub-seconds, no `+00:00`, always `Z`. This is also the `Serialize`
//! representation, so two builds from the same injected timestamp produce
//! byte-identical JSON.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::NgenError;

/// A UTC timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse_flexible()`] — from any ISO-8601 shape the brief
///   may carry.
/// - [`Timestamp::now()`] — current UTC time; used only by callers that
///   inject timestamps into the core, never by the core itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
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

    /// Parse a timestamp from any ISO-8601 shape the input document may use.
    ///
    /// Accepted, in order of attempt:
    /// 1. RFC 3339 with `Z` or an explicit offset (converted to UTC).
    /// 2. Naive `YYYY-MM-DDTHH:MM:SS` with optional fractional seconds,
    ///    interpreted as UTC.
    /// 3. Bare `YYYY-MM-DD`, interpreted as midnight UTC.
    ///
    /// # Errors
    ///
    /// Returns [`NgenError::Timestamp`] if none of the accepted shapes match.
    pub fn parse_flexible(s: &str) -> Result<Self, NgenError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))));
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(Self(truncate_to_seconds(Utc.from_utc_datetime(&naive))));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
                NgenError::Timestamp(format!("invalid date: {s:?}"))
            })?;
            return Ok(Self(Utc.from_utc_datetime(&midnight)));
        }
        Err(NgenError::Timestamp(format!(
            "not an ISO-8601 timestamp: {s:?}"
        )))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO-8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Timestamp::parse_flexible(&s).map_err(serde::de::Error::custom)
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
    use proptest::prelude::*;

    #[test]
    fn test_from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 45).unwrap();
        let dt_with_nanos = dt.with_nanosecond(123_456_789).unwrap();
        let ts = Timestamp::from_utc(dt_with_nanos);
        assert_eq!(ts.as_datetime().nanosecond(), 0);
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:30:45Z");
    }

    #[test]
    fn test_parse_z_suffix() {
        let ts = Timestamp::parse_flexible("2026-01-15T12:00:00Z").unwrap();
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_parse_offset_converts_to_utc() {
        let ts = Timestamp::parse_flexible("2026-01-15T17:00:00+05:00").unwrap();
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_parse_naive_taken_as_utc() {
        let ts = Timestamp::parse_flexible("2024-01-15T10:30:00").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_parse_fractional_seconds_truncated() {
        let ts = Timestamp::parse_flexible("2024-01-15T10:30:00.123456").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_parse_bare_date() {
        let ts = Timestamp::parse_flexible("2024-01-15").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Timestamp::parse_flexible("not-a-date").is_err());
        assert!(Timestamp::parse_flexible("15/01/2024").is_err());
        assert!(Timestamp::parse_flexible("").is_err());
    }

    #[test]
    fn test_display_matches_iso8601() {
        let ts = Timestamp::parse_flexible("2026-06-30T23:59:59Z").unwrap();
        assert_eq!(format!("{ts}"), ts.to_iso8601());
    }

    #[test]
    fn test_serde_roundtrip_is_canonical() {
        let ts = Timestamp::parse_flexible("2026-01-15T17:00:00+05:00").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2026-01-15T12:00:00Z\"");
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }

    #[test]
    fn test_ordering() {
        let earlier = Timestamp::parse_flexible("2026-01-15T12:00:00Z").unwrap();
        let later = Timestamp::parse_flexible("2026-01-15T12:00:01Z").unwrap();
        assert!(earlier < later);
    }

    proptest! {
        /// Any rendered timestamp re-parses to the same instant.
        #[test]
        fn prop_render_parse_roundtrip(secs in 0i64..4_102_444_800) {
            let dt = Utc.timestamp_opt(secs, 0).unwrap();
            let ts = Timestamp::from_utc(dt);
            let reparsed = Timestamp::parse_flexible(&ts.to_iso8601()).unwrap();
            prop_assert_eq!(ts, reparsed);
        }
    }
}
