//! Date helper functions

use chrono::NaiveDate;

/// Parse a strict `YYYY-MM-DD` calendar date
///
/// Anything else (missing zero padding, a time component, an impossible
/// day) yields `None`.
///
/// # Examples
/// ```ignore
/// parse_iso_date("2024-01-05") // -> Some(2024-01-05)
/// parse_iso_date("2024-1-5")   // -> None
/// ```
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Format a date as an RSS timestamp (RFC 1123 with numeric zone), at UTC midnight
pub fn date_rfc1123(date: &NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().format("%a, %d %b %Y %H:%M:%S %z").to_string())
        .unwrap_or_default()
}

/// Format a date as `YYYY-MM-DD`
pub fn date_ymd(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format date in long form (like "January 05, 2024")
pub fn full_date(date: &NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}
