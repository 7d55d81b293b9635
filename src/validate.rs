//! Calendar validation of raw day/month/year input.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::calendar::days_in_month;
use crate::date::{DateComponents, ValidatedDate};
use crate::error::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid(ValidatedDate),
    Invalid(ErrorKind),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    pub fn error(&self) -> Option<ErrorKind> {
        match self {
            ValidationOutcome::Valid(_) => None,
            ValidationOutcome::Invalid(kind) => Some(*kind),
        }
    }

    pub fn into_result(self) -> Result<ValidatedDate, ErrorKind> {
        match self {
            ValidationOutcome::Valid(date) => Ok(date),
            ValidationOutcome::Invalid(kind) => Err(kind),
        }
    }
}

impl From<Result<ValidatedDate, ErrorKind>> for ValidationOutcome {
    fn from(result: Result<ValidatedDate, ErrorKind>) -> Self {
        match result {
            Ok(date) => ValidationOutcome::Valid(date),
            Err(kind) => ValidationOutcome::Invalid(kind),
        }
    }
}

/// Checks that `components` is a real calendar day not later than `today`.
///
/// Rules run in a fixed order and the first failure is reported:
/// day range, month range, year ceiling, month length, then the full-date
/// future bound.
pub fn validate(components: DateComponents, today: NaiveDate) -> ValidationOutcome {
    let outcome: ValidationOutcome = check(components, today).into();
    if let ValidationOutcome::Invalid(kind) = outcome {
        debug!(?components, %today, ?kind, "birthdate rejected");
    }
    outcome
}

fn check(components: DateComponents, today: NaiveDate) -> Result<ValidatedDate, ErrorKind> {
    let DateComponents { day, month, year } = components;

    if !(1..=31).contains(&day) {
        return Err(ErrorKind::DayOutOfRange);
    }
    if !(1..=12).contains(&month) {
        return Err(ErrorKind::MonthOutOfRange);
    }
    if year > today.year() {
        return Err(ErrorKind::YearTooLarge);
    }

    let (day, month) = (day as u32, month as u32);
    let max_day = days_in_month(year, month).ok_or(ErrorKind::MonthOutOfRange)?;
    if day > max_day {
        return Err(ErrorKind::InvalidDayForMonth);
    }

    if (year, month, day) > (today.year(), today.month(), today.day()) {
        return Err(ErrorKind::InFuture);
    }

    Ok(ValidatedDate::new_unchecked(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
    }

    fn outcome(day: i32, month: i32, year: i32) -> ValidationOutcome {
        validate(DateComponents::new(day, month, year), today())
    }

    #[test]
    fn leap_day_only_in_leap_years() {
        assert!(outcome(29, 2, 2024).is_valid());
        assert!(outcome(29, 2, 2000).is_valid());
        assert_eq!(outcome(29, 2, 2023).error(), Some(ErrorKind::InvalidDayForMonth));
        assert_eq!(outcome(29, 2, 1900).error(), Some(ErrorKind::InvalidDayForMonth));
        assert_eq!(outcome(30, 2, 2024).error(), Some(ErrorKind::InvalidDayForMonth));
    }

    #[test]
    fn thirty_day_months() {
        assert_eq!(outcome(31, 4, 2020).error(), Some(ErrorKind::InvalidDayForMonth));
        assert!(outcome(30, 4, 2020).is_valid());
        for month in [6, 9, 11] {
            assert_eq!(outcome(31, month, 2020).error(), Some(ErrorKind::InvalidDayForMonth));
        }
        assert!(outcome(31, 12, 2020).is_valid());
    }

    #[test]
    fn range_checks() {
        assert_eq!(outcome(32, 1, 2020).error(), Some(ErrorKind::DayOutOfRange));
        assert_eq!(outcome(0, 1, 2020).error(), Some(ErrorKind::DayOutOfRange));
        assert_eq!(outcome(-3, 1, 2020).error(), Some(ErrorKind::DayOutOfRange));
        assert_eq!(outcome(1, 0, 2020).error(), Some(ErrorKind::MonthOutOfRange));
        assert_eq!(outcome(1, 13, 2020).error(), Some(ErrorKind::MonthOutOfRange));
        assert_eq!(outcome(1, 1, 2025).error(), Some(ErrorKind::YearTooLarge));
    }

    #[test]
    fn first_violation_wins() {
        assert_eq!(outcome(32, 13, 2099).error(), Some(ErrorKind::DayOutOfRange));
        assert_eq!(outcome(31, 13, 2099).error(), Some(ErrorKind::MonthOutOfRange));
        assert_eq!(outcome(31, 4, 2099).error(), Some(ErrorKind::YearTooLarge));
        assert_eq!(outcome(31, 6, 2024).error(), Some(ErrorKind::InvalidDayForMonth));
    }

    #[test]
    fn later_this_year_is_in_future() {
        assert_eq!(outcome(15, 6, 2024).error(), Some(ErrorKind::InFuture));
        assert_eq!(outcome(1, 12, 2024).error(), Some(ErrorKind::InFuture));
        assert!(outcome(14, 6, 2024).is_valid());
    }

    #[test]
    fn extreme_years_do_not_panic() {
        assert!(outcome(1, 1, i32::MIN).is_valid());
        assert_eq!(outcome(1, 1, i32::MAX).error(), Some(ErrorKind::YearTooLarge));
    }

    #[test]
    fn valid_outcome_carries_the_date() {
        let date = outcome(10, 3, 1990).into_result().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1990, 3, 10));
    }
}
