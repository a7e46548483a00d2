/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the list tables
use chrono::{DateTime, NaiveDate};

/// Format ISO datetime string to "Mar 15, 2024 14:02" format
/// Example: "2024-03-15T14:02:26.000000Z" -> "Mar 15, 2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.format("%b %d, %Y %H:%M").to_string(),
        Err(_) => format_date(datetime_str),
    }
}

/// Format ISO date string to "Mar 15, 2024" format
/// Example: "2024-03-15" or "2024-03-15 14:02:26" -> "Mar 15, 2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.000000Z"),
            "Mar 15, 2024 14:02"
        );
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "Dec 31, 2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "Mar 15, 2024");
        assert_eq!(format_date("2024-03-15 14:02:26"), "Mar 15, 2024");
        assert_eq!(format_datetime("2024-03-15 14:02:26"), "Mar 15, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
