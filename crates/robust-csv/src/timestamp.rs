//! Timestamp parsing and rendering
//!
//! Accepted input forms, all resolved to UTC:
//!
//! - RFC 3339: `2024-05-01T13:00:00Z`, `2024-05-01T15:00:00+02:00`
//! - space-separated with offset: `2024-05-01 13:00:00+00:00`
//! - naive, taken as UTC: `2024-05-01 13:00:00`, `2024-05-01T13:00:00`,
//!   `2024-05-01 13:00`

use chrono::{DateTime, NaiveDateTime, Utc};
use robust_anomaly::TIMESTAMP_FORMAT;

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp cell, `None` if no accepted form matches
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(value, format) {
            return Some(ts.with_timezone(&Utc));
        }
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// Render as `YYYY-MM-DD HH:MM:SS+00:00`
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn one_pm() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap()
    }

    #[test]
    fn test_accepted_forms() {
        for value in [
            "2024-05-01T13:00:00Z",
            "2024-05-01T15:00:00+02:00",
            "2024-05-01 13:00:00+00:00",
            "2024-05-01 13:00:00+0000",
            "2024-05-01 13:00:00",
            "2024-05-01T13:00:00",
            "2024-05-01 13:00",
            " 2024-05-01 13:00:00 ",
        ] {
            assert_eq!(parse_timestamp(value), Some(one_pm()), "{value}");
        }
    }

    #[test]
    fn test_rejected_forms() {
        for value in ["", "2024-05-01", "13:00", "01/05/2024 13:00", "not a time"] {
            assert_eq!(parse_timestamp(value), None, "{value}");
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(format_timestamp(&one_pm()), "2024-05-01 13:00:00+00:00");
        assert_eq!(parse_timestamp(&format_timestamp(&one_pm())), Some(one_pm()));
    }
}
