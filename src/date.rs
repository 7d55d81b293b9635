use chrono::{Datelike, NaiveDate};

use crate::error::ErrorKind;
use crate::validate::validate;

/// Raw, possibly invalid, day/month/year as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateComponents {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl DateComponents {
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }
}

impl From<NaiveDate> for DateComponents {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: date.day() as i32,
            month: date.month() as i32,
            year: date.year(),
        }
    }
}

/// A real Gregorian date no later than the reference day it was validated
/// against. Only produced by [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValidatedDate {
    // Field order gives chronological `Ord`.
    year: i32,
    month: u32,
    day: u32,
}

impl ValidatedDate {
    /// Caller must have checked the triple against the calendar.
    pub(crate) fn new_unchecked(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Validates a date chrono already knows to be real; only the future
    /// bound can still fail.
    pub fn from_naive(date: NaiveDate, today: NaiveDate) -> Result<Self, ErrorKind> {
        validate(DateComponents::from(date), today).into_result()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}
