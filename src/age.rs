//! age.rs
//!
//! Elapsed age in whole years, months and days, rendered as
//!     "X years, Y months, Z days"
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so the calendar-aware borrowing rules are implemented
//! manually:
//!   • the birthday-not-yet-reached case borrows a year into the months
//!   • day underflow borrows the length of the month before `today`
//!
//! The day borrow is not re-normalised: a birth day longer than the month
//! before `today` (born on the 31st, today in March of a common year) yields
//! a negative day count.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::calendar::days_in_previous_month;
use crate::date::ValidatedDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Age {
    pub years: i64,
    pub months: i32,
    pub days: i32,
}

/// Computes the elapsed age between `birthdate` and `today`.
pub fn calculate_age(birthdate: &ValidatedDate, today: NaiveDate) -> Age {
    let mut years = i64::from(today.year()) - i64::from(birthdate.year());
    let mut months = today.month() as i32 - birthdate.month() as i32;
    let mut days = today.day() as i32 - birthdate.day() as i32;

    // Birthday not reached yet this year, judged on month and day only
    if months < 0 || (months == 0 && today.day() < birthdate.day()) {
        years -= 1;
        months += 12;
    }

    // Fix day underflow
    if days < 0 {
        days = days_in_previous_month(today) as i32 - birthdate.day() as i32 + today.day() as i32;
        months -= 1;
    }

    let age = Age {
        years,
        months,
        days,
    };
    debug!(?birthdate, %today, %age, "computed age");
    age
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(i64::from(self.months)),
            self.days,
            plural(i64::from(self.days))
        )
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}
