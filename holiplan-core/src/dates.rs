//! Calendar date helpers shared by the grid and vacation modules.
//!
//! Months are zero-based (0 = January) wherever they index the year grid,
//! days are one-based.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{HoliplanError, HoliplanResult};

/// Number of days in a zero-based month, or 0 if the month is out of range.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|day| NaiveDate::from_ymd_opt(year, month0 + 1, *day).is_some())
        .unwrap_or(0)
}

/// Format a (year, zero-based month, day) triple as `YYYY-MM-DD`.
///
/// No validation happens here: `format_iso(2026, 1, 30)` yields `2026-02-30`,
/// which is how invalid grid cells are labelled.
pub fn format_iso(year: i32, month0: u32, day: u32) -> String {
    format!("{}-{:02}-{:02}", year, month0 + 1, day)
}

/// True if `s` has the exact `NNNN-NN-NN` shape (digits only, no sign).
pub fn is_iso_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a strict `YYYY-MM-DD` string into a real calendar date.
pub fn parse_iso(s: &str) -> HoliplanResult<NaiveDate> {
    if !is_iso_shape(s) {
        return Err(HoliplanError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| HoliplanError::InvalidDate(s.to_string()))
}

/// The calendar day after `date`.
pub fn next_day(date: NaiveDate) -> Option<NaiveDate> {
    date.succ_opt()
}

/// English weekday name, e.g. "Monday".
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Saturday or Sunday, regardless of any location's own weekend rule.
pub fn is_global_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Every date from `a` to `b` inclusive, in ascending order whichever comes first.
pub fn dates_between(a: NaiveDate, b: NaiveDate) -> Vec<NaiveDate> {
    let (from, to) = if a <= b { (a, b) } else { (b, a) };
    from.iter_days().take_while(|d| *d <= to).collect()
}
