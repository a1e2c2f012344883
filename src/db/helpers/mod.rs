use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// Canonical stored form of a timestamp: fixed-width UTC with microseconds,
/// e.g. `2024-01-01T08:30:00.000000Z`. String order equals time order.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("failed to parse {field}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_is_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let fractional = whole + chrono::Duration::microseconds(123_456);

        assert_eq!(format_timestamp(&whole), "2024-01-02T03:04:05.000000Z");
        assert_eq!(format_timestamp(&fractional), "2024-01-02T03:04:05.123456Z");
    }

    #[test]
    fn test_format_timestamp_sorts_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2024, 9, 30, 23, 59, 59).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap();

        assert!(format_timestamp(&earlier) < format_timestamp(&later));
    }

    #[test]
    fn test_parse_datetime_round_trips_stored_form() {
        let value = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();

        let parsed = parse_datetime(&format_timestamp(&value), "timestamp").unwrap();

        assert_eq!(parsed, value);
    }

    #[test]
    fn test_parse_datetime_names_field_on_error() {
        let err = parse_datetime("yesterday", "timestamp").unwrap_err();

        assert!(err.to_string().contains("timestamp"));
    }
}
