//! Calendar helpers built on `chrono`
//!
//! Calendar dates are `NaiveDate`; instants are `DateTime<Utc>`.

use crate::error::{common, ErrorCode, Result, ToolbeltError};
use crate::guards::ensure_non_empty;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};
use std::fmt::Write as _;

/// Format `date` with a strftime pattern
///
/// Patterns with unknown specifiers, or with time and offset specifiers a
/// calendar date cannot supply (`%H`, `%Z`, ...), are rejected instead of
/// panicking during formatting.
///
/// ```
/// use chrono::NaiveDate;
/// use toolbelt::date::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(format_date(&date, "%d/%m/%Y").unwrap(), "09/03/2024");
/// assert!(format_date(&date, "%Q").is_err());
/// ```
pub fn format_date(date: &NaiveDate, pattern: &str) -> Result<String> {
    let items = parse_pattern(pattern)?;
    let mut formatted = String::new();
    write!(formatted, "{}", date.format_with_items(items.into_iter())).map_err(|_| {
        common::invalid_pattern(
            "pattern",
            format!("'{}' needs time or offset fields a date does not have", pattern),
        )
    })?;
    Ok(formatted)
}

fn parse_pattern(pattern: &str) -> Result<Vec<Item<'_>>> {
    ensure_non_empty("pattern", pattern)?;
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(common::invalid_pattern(
            "pattern",
            format!("'{}' contains an unknown format specifier", pattern),
        ));
    }
    Ok(items)
}

/// Parse `input` according to a strftime pattern
pub fn parse_date(input: &str, pattern: &str) -> Result<NaiveDate> {
    ensure_non_empty("input", input)?;
    parse_pattern(pattern)?;
    Ok(NaiveDate::parse_from_str(input.trim(), pattern)?)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    parse_date(input, "%Y-%m-%d")
}

/// Shift `date` by `days`, which may be negative
pub fn add_days(date: &NaiveDate, days: i64) -> Result<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.ok_or_else(|| common::out_of_range("days", days, "within the supported calendar"))
}

/// Signed number of days from `start` to `end`
pub fn days_between(start: &NaiveDate, end: &NaiveDate) -> i64 {
    end.signed_duration_since(*start).num_days()
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(common::out_of_range("month", month, "between 1 and 12")),
    }
}

pub fn is_weekend(date: &NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Monday of the ISO week containing `date`
pub fn start_of_week(date: &NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// Calendar quarter, 1 through 4
pub fn quarter_of(date: &NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

/// Whole years elapsed between `birth_date` and `on`
pub fn calculate_age(birth_date: &NaiveDate, on: &NaiveDate) -> Result<u32> {
    if birth_date > on {
        return Err(ToolbeltError::value_with_code(
            ErrorCode::VALUE_OUT_OF_RANGE,
            format!("'birth_date' ({}) is after {}", birth_date, on),
            Some("birth_date".to_string()),
        ));
    }
    Ok(on.years_since(*birth_date).unwrap_or(0))
}

pub fn to_unix_timestamp(instant: &DateTime<Utc>) -> i64 {
    instant.timestamp()
}

pub fn from_unix_timestamp(seconds: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| common::out_of_range("seconds", seconds, "a representable timestamp"))
}

/// Human description of `then` relative to `now`
///
/// ```
/// use chrono::{Duration, Utc};
/// use toolbelt::date::time_ago;
///
/// let now = Utc::now();
/// assert_eq!(time_ago(&(now - Duration::minutes(5)), &now), "5 minutes ago");
/// assert_eq!(time_ago(&(now + Duration::days(1)), &now), "in 1 day");
/// ```
pub fn time_ago(then: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*then).num_seconds();
    let future = seconds < 0;
    let elapsed = seconds.unsigned_abs();

    if elapsed < 45 {
        return "just now".to_string();
    }

    const UNITS: [(&str, u64); 6] = [
        ("year", 365 * 24 * 3600),
        ("month", 30 * 24 * 3600),
        ("day", 24 * 3600),
        ("hour", 3600),
        ("minute", 60),
        ("second", 1),
    ];

    let (unit, size) = UNITS
        .iter()
        .find(|(_, size)| elapsed >= *size)
        .copied()
        .unwrap_or(("second", 1));
    let count = elapsed / size;
    let plural = if count == 1 { "" } else { "s" };

    if future {
        format!("in {} {}{}", count, unit, plural)
    } else {
        format!("{} {}{} ago", count, unit, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        let d = date(2023, 12, 25);
        assert_eq!(format_date(&d, "%Y-%m-%d").unwrap(), "2023-12-25");
        assert_eq!(format_date(&d, "%A, %B %-d").unwrap(), "Monday, December 25");
    }

    #[test]
    fn test_format_date_rejects_bad_patterns() {
        let d = date(2023, 1, 1);
        assert_eq!(
            format_date(&d, "").unwrap_err().code(),
            ErrorCode::VALUE_EMPTY
        );
        assert_eq!(
            format_date(&d, "%Y-%Q").unwrap_err().code(),
            ErrorCode::VALUE_INVALID_PATTERN
        );
    }

    #[test]
    fn test_format_date_rejects_time_and_offset_specifiers() {
        let d = date(2024, 1, 1);
        for pattern in ["%Y %H:%M", "%Z", "%z", "%S", "%s"] {
            let err = format_date(&d, pattern).unwrap_err();
            assert_eq!(err.code(), ErrorCode::VALUE_INVALID_PATTERN, "{pattern}");
            assert_eq!(err.param(), Some("pattern"));
        }
    }

    #[test]
    fn test_parse_dates() {
        assert_eq!(parse_iso_date("2024-02-29").unwrap(), date(2024, 2, 29));
        assert_eq!(parse_date("03/15/2022", "%m/%d/%Y").unwrap(), date(2022, 3, 15));

        let err = parse_iso_date("2023-02-29").unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALUE_INVALID_FORMAT);
        assert!(parse_iso_date("").is_err());
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_days(&date(2024, 2, 28), 1).unwrap(), date(2024, 2, 29));
        assert_eq!(add_days(&date(2024, 1, 1), -1).unwrap(), date(2023, 12, 31));
        assert!(add_days(&NaiveDate::MAX, 1).is_err());
    }

    #[test]
    fn test_days_between_is_signed() {
        let a = date(2024, 1, 1);
        let b = date(2024, 3, 1);
        assert_eq!(days_between(&a, &b), 60);
        assert_eq!(days_between(&b, &a), -60);
    }

    #[test]
    fn test_leap_years_and_month_lengths() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2023, 11).unwrap(), 30);
        assert!(days_in_month(2023, 13).unwrap_err().is_value_error());
        assert!(days_in_month(2023, 0).is_err());
    }

    #[test]
    fn test_weekends_and_weeks() {
        assert!(is_weekend(&date(2024, 6, 8)));
        assert!(!is_weekend(&date(2024, 6, 10)));
        assert_eq!(start_of_week(&date(2024, 6, 13)), date(2024, 6, 10));
        assert_eq!(start_of_week(&date(2024, 6, 10)), date(2024, 6, 10));
        assert_eq!(quarter_of(&date(2024, 8, 1)), 3);
    }

    #[test]
    fn test_calculate_age() {
        let birth = date(1990, 6, 15);
        assert_eq!(calculate_age(&birth, &date(2024, 6, 14)).unwrap(), 33);
        assert_eq!(calculate_age(&birth, &date(2024, 6, 15)).unwrap(), 34);
        assert!(calculate_age(&date(2030, 1, 1), &date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_unix_timestamps() {
        let instant = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(to_unix_timestamp(&instant), 1_609_459_200);
        assert_eq!(from_unix_timestamp(1_609_459_200).unwrap(), instant);
        assert!(from_unix_timestamp(i64::MAX).is_err());
    }

    #[test]
    fn test_time_ago() {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        assert_eq!(time_ago(&(now - Duration::seconds(10)), &now), "just now");
        assert_eq!(time_ago(&(now - Duration::hours(1)), &now), "1 hour ago");
        assert_eq!(time_ago(&(now - Duration::days(3)), &now), "3 days ago");
        assert_eq!(time_ago(&(now + Duration::minutes(2)), &now), "in 2 minutes");
        assert_eq!(time_ago(&(now - Duration::days(400)), &now), "1 year ago");
    }
}
