//! Date coercion for payload and query fields.
//!
//! Date-bearing fields (`eventDate`, `scheduledAt`, `dueDate`, and the
//! `dateStart`/`dateEnd` calendar filters) accept:
//!
//! - RFC 3339 strings (`2024-04-15T20:00:00Z`, `2024-04-15T20:00:00-03:00`),
//! - naive date-times, taken as UTC (`2024-04-15T20:00:00`, `2024-04-15 20:00:00.5`),
//! - plain dates, taken as midnight UTC (`2024-04-15`),
//! - integer epoch milliseconds (what a JavaScript `Date` coerces to).
//!
//! Everything is normalized to [`Timestamp`].

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::types::Timestamp;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a date string in any of the accepted textual forms.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// A timestamp that deserializes from a string or epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexibleTimestamp(pub Timestamp);

impl<'de> Deserialize<'de> for FlexibleTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FlexibleTimestampVisitor)
    }
}

struct FlexibleTimestampVisitor;

impl Visitor<'_> for FlexibleTimestampVisitor {
    type Value = FlexibleTimestamp;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an ISO-8601 date string or epoch milliseconds")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_timestamp(v)
            .map(FlexibleTimestamp)
            .ok_or_else(|| E::custom(format!("invalid date '{v}'")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        DateTime::from_timestamp_millis(v)
            .map(FlexibleTimestamp)
            .ok_or_else(|| E::custom(format!("epoch milliseconds out of range: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let millis =
            i64::try_from(v).map_err(|_| E::custom(format!("epoch milliseconds out of range: {v}")))?;
        self.visit_i64(millis)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() {
            return Err(E::custom("epoch milliseconds must be finite"));
        }
        self.visit_i64(v.trunc() as i64)
    }
}

/// `deserialize_with` target for a required date field.
pub fn required<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    FlexibleTimestamp::deserialize(deserializer).map(|t| t.0)
}

/// `deserialize_with` target for an optional date field (`null` is `None`).
/// Pair with `#[serde(default)]`.
pub fn optional<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<FlexibleTimestamp>::deserialize(deserializer).map(|t| t.map(|t| t.0))
}

/// `deserialize_with` target for a non-nullable date in an update DTO: absent
/// is `None`, `null` is an error. Pair with `#[serde(default)]`.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    crate::patch::not_null(deserializer).map(|t: Option<FlexibleTimestamp>| t.map(|t| t.0))
}

/// `deserialize_with` target for a nullable date in an update DTO: absent is
/// `None`, `null` is `Some(None)`. Pair with `#[serde(default)]`.
pub fn patch<'de, D>(deserializer: D) -> Result<Option<Option<Timestamp>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        assert_eq!(
            parse_timestamp("2024-04-15T20:00:00-03:00"),
            Some(utc(2024, 4, 15, 23, 0, 0))
        );
    }

    #[test]
    fn parses_javascript_iso_string() {
        assert_eq!(
            parse_timestamp("2024-06-01T12:30:00.000Z"),
            Some(utc(2024, 6, 1, 12, 30, 0))
        );
    }

    #[test]
    fn naive_datetime_is_taken_as_utc() {
        assert_eq!(
            parse_timestamp("2024-06-01T12:30:00"),
            Some(utc(2024, 6, 1, 12, 30, 0))
        );
        assert_eq!(
            parse_timestamp("2024-06-01T12:30"),
            Some(utc(2024, 6, 1, 12, 30, 0))
        );
    }

    #[test]
    fn plain_date_is_midnight_utc() {
        assert_eq!(parse_timestamp("2024-04-15"), Some(utc(2024, 4, 15, 0, 0, 0)));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_timestamp("next tuesday"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[derive(Debug, Deserialize)]
    struct Event {
        #[serde(deserialize_with = "required")]
        at: Timestamp,
        #[serde(default, deserialize_with = "optional")]
        due: Option<Timestamp>,
        #[serde(default, deserialize_with = "patch")]
        moved: Option<Option<Timestamp>>,
        #[serde(default, deserialize_with = "present")]
        shifted: Option<Timestamp>,
    }

    #[test]
    fn epoch_millis_are_accepted() {
        let event: Event = serde_json::from_value(json!({"at": 1_713_139_200_000_i64})).unwrap();
        assert_eq!(event.at, utc(2024, 4, 15, 0, 0, 0));
        assert_eq!(event.due, None);
    }

    #[test]
    fn patch_distinguishes_absent_from_null() {
        let absent: Event = serde_json::from_value(json!({"at": "2024-04-15"})).unwrap();
        assert_eq!(absent.moved, None);

        let cleared: Event =
            serde_json::from_value(json!({"at": "2024-04-15", "moved": null})).unwrap();
        assert_eq!(cleared.moved, Some(None));

        let set: Event =
            serde_json::from_value(json!({"at": "2024-04-15", "moved": "2024-05-01"})).unwrap();
        assert_eq!(set.moved, Some(Some(utc(2024, 5, 1, 0, 0, 0))));
    }

    #[test]
    fn invalid_string_fails_deserialization() {
        let result = serde_json::from_value::<Event>(json!({"at": "soon"}));
        assert!(result.is_err());
    }

    #[test]
    fn present_rejects_null_but_allows_absence() {
        let absent: Event = serde_json::from_value(json!({"at": "2024-04-15"})).unwrap();
        assert_eq!(absent.shifted, None);

        let moved: Event =
            serde_json::from_value(json!({"at": "2024-04-15", "shifted": "2024-04-16"})).unwrap();
        assert_eq!(moved.shifted, Some(utc(2024, 4, 16, 0, 0, 0)));

        let err = serde_json::from_value::<Event>(json!({"at": "2024-04-15", "shifted": null}));
        assert!(err.is_err());
    }
}
