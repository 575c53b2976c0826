//! Month-grid construction and local-date bucketing of check-ins.
//!
//! Pure logic, no I/O: the routes fetch records and hand them here, the
//! templates render whatever comes back. The grid is a flat sequence of
//! cells; the view wraps it into 7 columns.

use chrono::{Datelike, NaiveDate};

use crate::db::models::Checkin;

/// One slot in the month grid: either a leading blank before the 1st, or
/// a day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day(u32),
}

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Most mood dots a compact day cell shows; the rest collapse into a
/// "+N" overflow label.
pub const MAX_DAY_MARKS: usize = 3;

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month as usize - 1) % 12]
}

/// Number of days in the given month: the day before the 1st of the
/// following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = next_month(year, month);
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Weekday index of the 1st of the month, Sunday = 0 .. Saturday = 6.
pub fn first_weekday_index(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Build the flat cell sequence for a month: leading blanks for the
/// weekday of the 1st, then one cell per day. No trailing padding.
pub fn build_month_grid(year: i32, month: u32) -> Vec<CalendarCell> {
    let leading = first_weekday_index(year, month);
    let days = days_in_month(year, month);

    let mut cells = Vec::with_capacity((leading + days) as usize);
    for _ in 0..leading {
        cells.push(CalendarCell::Blank);
    }
    for day in 1..=days {
        cells.push(CalendarCell::Day(day));
    }
    cells
}

/// (year, month) one month back; January rolls into December of the
/// prior year.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// (year, month) one month forward; December rolls into January of the
/// following year.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Records created on the target local calendar date, in the order they
/// were given. Equality is on the local date, never the exact timestamp.
pub fn bucket_by_day<'a>(records: &'a [Checkin], date: NaiveDate) -> Vec<&'a Checkin> {
    records
        .iter()
        .filter(|record| record.local_date() == Some(date))
        .collect()
}

/// Compact-cell view of one day's bucket: at most [`MAX_DAY_MARKS`]
/// records shown as dots, the remainder as an overflow count.
pub struct DaySummary<'a> {
    pub visible: Vec<&'a Checkin>,
    pub overflow: usize,
}

pub fn summarize_day<'a>(bucket: &[&'a Checkin]) -> DaySummary<'a> {
    DaySummary {
        visible: bucket.iter().take(MAX_DAY_MARKS).copied().collect(),
        overflow: bucket.len().saturating_sub(MAX_DAY_MARKS),
    }
}
