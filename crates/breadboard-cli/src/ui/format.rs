//! String formatting for dates, amounts and table cells.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

pub use breadboard_core::services::format_currency;

/// Truncate to `max_len` characters, ending with "..." when shortened.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

/// Calendar date in the display timezone.
pub fn format_date(dt: &DateTime<Utc>, tz: Option<Tz>) -> String {
    match tz {
        Some(tz) => dt.with_timezone(&tz).format("%Y-%m-%d").to_string(),
        None => dt.format("%Y-%m-%d").to_string(),
    }
}

/// Date and time for display; RFC 3339 in UTC when not pretty.
pub fn format_datetime(dt: &DateTime<Utc>, tz: Option<Tz>, pretty: bool) -> String {
    if !pretty {
        return dt.to_rfc3339();
    }
    match tz {
        Some(tz) => dt.with_timezone(&tz).format("%Y-%m-%d %H:%M %Z").to_string(),
        None => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
    }
}

/// A fraction in `[0, 1]` as a whole percentage.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Countdown wording for a number of days.
pub fn format_days(days: i64) -> String {
    match days {
        i64::MIN..=-1 => "overdue".to_string(),
        0 => "today".to_string(),
        1 => "1 day".to_string(),
        n => format!("{} days", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Acme Studio", 20), "Acme Studio");
        assert_eq!(truncate("Northwind Analytics", 10), "Northwi...");
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_format_date_with_timezone() {
        let dt = Utc.with_ymd_and_hms(2025, 6, 15, 2, 0, 0).unwrap();
        assert_eq!(format_date(&dt, None), "2025-06-15");
        assert_eq!(
            format_date(&dt, Some(chrono_tz::America::Los_Angeles)),
            "2025-06-14"
        );
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2025, 6, 15, 9, 30, 0).unwrap();
        assert_eq!(format_datetime(&dt, None, true), "2025-06-15 09:30 UTC");
        assert_eq!(format_datetime(&dt, None, false), "2025-06-15T09:30:00+00:00");
        assert_eq!(
            format_datetime(&dt, Some(chrono_tz::Europe::Berlin), true),
            "2025-06-15 11:30 CEST"
        );
    }

    #[test]
    fn test_format_percent_and_days() {
        assert_eq!(format_percent(0.456), "46%");
        assert_eq!(format_days(-2), "overdue");
        assert_eq!(format_days(0), "today");
        assert_eq!(format_days(1), "1 day");
        assert_eq!(format_days(18), "18 days");
    }

    #[test]
    fn test_currency_reexport() {
        assert_eq!(format_currency(12500.0), "$12,500");
    }
}
