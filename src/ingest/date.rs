// =============================================================================
// Date tokens
// =============================================================================
//
// Price exports disagree on how a day is written.  The accepted shapes are
// tried in order; a date-time is reduced to its calendar date.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%Y"];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a CSV date token into a calendar date.
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(token, fmt) {
            return Some(date);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(token) {
        return Some(dt.date_naive());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(token, fmt).ok())
        .map(|dt| dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_dates() {
        assert_eq!(parse_date("2024-03-15"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_date("  2024-03-15 "), Some(ymd(2024, 3, 15)));
    }

    #[test]
    fn slashed_and_named_month_dates() {
        assert_eq!(parse_date("2024/03/15"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_date("03/15/2024"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_date("15-Mar-2024"), Some(ymd(2024, 3, 15)));
    }

    #[test]
    fn date_times_keep_calendar_day() {
        assert_eq!(parse_date("2024-03-15T09:30:00"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_date("2024-03-15 16:00:00"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_date("2024-03-15T09:30:00Z"), Some(ymd(2024, 3, 15)));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-13-40"), None);
    }
}
