//! Lenient ISO-8601 timestamp parsing.
//!
//! Servers differ in how strictly they follow `xsd:dateTime`: some omit the
//! zone designator, some send a bare date. Values without a zone are taken
//! as UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

use crate::Error;

/// A point in time as carried by the protocol.
pub type Timestamp = DateTime<FixedOffset>;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a protocol timestamp.
///
/// Accepted forms, tried in order:
/// - RFC 3339 (`2024-03-01T12:00:00Z`, `2024-03-01T12:00:00.5+01:00`)
/// - date and time without zone (UTC assumed)
/// - bare date (midnight UTC)
pub fn parse_timestamp(text: &str) -> Result<Timestamp, Error> {
    let text = text.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(ts);
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
        .ok_or_else(|| Error::InvalidTimestamp(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_less_timestamp_is_utc() {
        let ts = parse_timestamp("2024-03-01T12:30:00").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 0);
        assert_eq!(ts.to_rfc3339(), "2024-03-01T12:30:00+00:00");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(parse_timestamp("  2024-03-01T12:30:00Z \n").is_ok());
    }
}
