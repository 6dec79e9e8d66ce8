/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, NaiveDate, Utc};

/// Format a date as DD.MM.YYYY.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format a UTC timestamp as DD.MM.YYYY HH:MM.
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// Label for a whole-hour slot boundary, e.g. 18 -> "18:00".
pub fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// Coarse "how long ago" label for the notification feed.
pub fn time_ago(from: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(from);
    let minutes = delta.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if minutes < 60 * 24 {
        format!("{} h ago", delta.num_hours())
    } else {
        format!("{} d ago", delta.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(format_date(date), "15.03.2025");
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(format_datetime(dt), "31.12.2025 23:59");
    }

    #[test]
    fn test_hour_label_pads() {
        assert_eq!(hour_label(7), "07:00");
        assert_eq!(hour_label(18), "18:00");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2025, 6, 12, 12, 0, 0).unwrap();
        let cases = [
            (now - chrono::Duration::seconds(20), "just now"),
            (now - chrono::Duration::minutes(5), "5 min ago"),
            (now - chrono::Duration::hours(3), "3 h ago"),
            (now - chrono::Duration::days(2), "2 d ago"),
        ];
        for (from, expected) in cases {
            assert_eq!(time_ago(from, now), expected);
        }
    }
}
