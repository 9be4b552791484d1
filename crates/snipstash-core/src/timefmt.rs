//! Serde helpers for the `YYYY-MM-DD HH:MM:SS` (UTC) timestamp format used
//! both on the wire and in storage. The format sorts lexicographically in
//! chronological order.

use jiff::Timestamp;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use serde::{Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
pub fn format(ts: Timestamp) -> String {
    ts.strftime(FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD HH:MM:SS` string as a UTC timestamp.
pub fn parse(s: &str) -> Result<Timestamp, jiff::Error> {
    let dt = DateTime::strptime(FORMAT, s)?;
    Ok(dt.to_zoned(TimeZone::UTC)?.timestamp())
}

pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(*ts))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let ts = parse("2026-01-02 03:04:05").unwrap();
        assert_eq!(format(ts), "2026-01-02 03:04:05");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse("2026-01-02T03:04:05Z").is_err());
        assert!(parse("not a timestamp").is_err());
    }
}
