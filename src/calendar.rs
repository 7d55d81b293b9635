//! Gregorian calendar helpers shared by validation and age arithmetic.

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
///
/// Holds for year zero and negative (proleptic) years as well.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

use chrono::{Datelike, NaiveDate};

/// Returns number of days in a given year/month (handles leap years).
/// `None` when `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    (1..=12).contains(&month).then(|| month_length(year, month))
}

/// The month before `(year, month)`; January wraps to December of the prior year.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Length of the month preceding `date`'s month.
pub fn days_in_previous_month(date: NaiveDate) -> u32 {
    // chrono months are 1..=12 and previous_month stays in that range
    let (year, month) = previous_month(date.year(), date.month());
    month_length(year, month)
}

/// `month` must already be in 1..=12.
fn month_length(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
