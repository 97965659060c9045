//! Date parsing for tick records.
//!
//! Tick dates arrive as free text. A strict `YYYY-MM-DD` parse is tried first,
//! then a fixed list of fallback formats. Nothing here depends on the locale.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime};

/// Fallback formats for plain dates, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a %b %d %Y",
];

/// Fallback formats for naive timestamps; only the date part is kept.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    parse_strict(raw).or_else(|| parse_fallback(raw))
}

fn parse_strict(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(idx, b)| idx == 4 || idx == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let year = raw[0..4].parse().ok()?;
    let month = raw[5..7].parse().ok()?;
    let day = raw[8..10].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_fallback(raw: &str) -> Option<NaiveDate> {
    let input = raw.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(input) {
        return Some(stamp.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|stamp| stamp.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
        })
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(start) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    match start.checked_add_months(Months::new(1)) {
        Some(next) => (next - start).num_days() as u32,
        // Only reachable at the very end of chrono's range.
        None => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn strict_iso_dates_parse() {
        assert_eq!(parse_record_date("2024-01-15"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_record_date("2024-02-29"), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert_eq!(parse_record_date("2024-13-01"), None);
        assert_eq!(parse_record_date("2023-02-29"), None);
        assert_eq!(parse_record_date("2024-04-31"), None);
        assert_eq!(parse_record_date("13/01/2024"), None);
        assert_eq!(parse_record_date("February 30, 2024"), None);
    }

    #[test]
    fn fallback_formats_parse() {
        let expected = Some(ymd(2024, 3, 5));
        assert_eq!(parse_record_date("2024/03/05"), expected);
        assert_eq!(parse_record_date("03/05/2024"), expected);
        assert_eq!(parse_record_date("March 5, 2024"), expected);
        assert_eq!(parse_record_date("Mar 5, 2024"), expected);
        assert_eq!(parse_record_date("5 March 2024"), expected);
        assert_eq!(parse_record_date("Tue Mar 05 2024"), expected);
        assert_eq!(parse_record_date("  2024-03-05  "), expected);
    }

    #[test]
    fn timestamps_keep_the_written_date() {
        assert_eq!(parse_record_date("2024-03-05T23:30:00Z"), Some(ymd(2024, 3, 5)));
        assert_eq!(
            parse_record_date("2024-03-05T23:30:00-07:00"),
            Some(ymd(2024, 3, 5))
        );
        assert_eq!(parse_record_date("2024-03-05 08:15:00"), Some(ymd(2024, 3, 5)));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_record_date(""), None);
        assert_eq!(parse_record_date("   "), None);
        assert_eq!(parse_record_date("yesterday"), None);
        assert_eq!(parse_record_date("2024-1-5x"), None);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn first_of_month_truncates() {
        assert_eq!(first_of_month(ymd(2024, 7, 31)), ymd(2024, 7, 1));
    }
}
