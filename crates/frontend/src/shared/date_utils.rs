/// Utilities for date formatting
///
/// Provides consistent date display across the dashboard
use chrono::NaiveDate;

/// Format a snapshot date for the header, e.g. 2026-07-31 -> "July 31, 2026"
pub fn format_snapshot_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Compact year-pair label, e.g. (2026, 2025) -> "2026 vs 2025"
pub fn format_year_pair(current: i32, previous: i32) -> String {
    format!("{} vs {}", current, previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_snapshot_date() {
        let date = NaiveDate::from_ymd_opt(2026, 7, 31).unwrap();
        assert_eq!(format_snapshot_date(date), "July 31, 2026");

        let single_digit = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_snapshot_date(single_digit), "March 5, 2025");
    }

    #[test]
    fn test_format_year_pair() {
        assert_eq!(format_year_pair(2026, 2025), "2026 vs 2025");
    }
}
