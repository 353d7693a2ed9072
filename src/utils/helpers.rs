//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// Format a date the long way, e.g. "October 19, 2026"
pub fn format_long_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a date as month and day, e.g. "Oct 19"
pub fn format_short_date(date: DateTime<Utc>) -> String {
    date.format("%b %d").to_string()
}

/// Full weekday name, e.g. "Monday"
pub fn weekday_name(date: DateTime<Utc>) -> String {
    date.format("%A").to_string()
}

/// The seven calendar days ending with `today`, oldest first
pub fn last_seven_days(today: NaiveDate) -> Vec<NaiveDate> {
    (0..7)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect()
}

/// True when `date` falls within the seven days before `now`
pub fn within_last_week(date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    date >= now - Duration::days(7)
}

/// Day of the month for `now`, used as the elapsed-days denominator
pub fn day_of_month(now: DateTime<Utc>) -> u32 {
    now.day()
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Accept either a JSON string or a JSON number and keep it as text.
///
/// The backend is inconsistent about `cms_id`, `room_no` and `amount`.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Int(value) => value.to_string(),
        Raw::Float(value) => value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_formats() {
        let date = Utc.with_ymd_and_hms(2026, 10, 9, 8, 0, 0).unwrap();
        assert_eq!(format_long_date(date), "October 9, 2026");
        assert_eq!(format_short_date(date), "Oct 09");
        assert_eq!(weekday_name(date), "Friday");
    }

    #[test]
    fn test_last_seven_days_ends_today() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let days = last_seven_days(today);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2026, 2, 24).unwrap());
        assert_eq!(days[6], today);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a much longer complaint", 10), "a much ...");
    }

    #[test]
    fn test_string_or_number() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "string_or_number")]
            room: String,
            #[serde(deserialize_with = "string_or_number")]
            amount: String,
        }

        let row: Row = serde_json::from_str(r#"{"room": 204, "amount": 4500.5}"#).unwrap();
        assert_eq!(row.room, "204");
        assert_eq!(row.amount, "4500.5");

        let row: Row = serde_json::from_str(r#"{"room": "B-12", "amount": "300"}"#).unwrap();
        assert_eq!(row.room, "B-12");
        assert_eq!(row.amount, "300");
    }
}
