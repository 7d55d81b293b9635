//! Reasons a day/month/year triple is rejected.
//!
//! Variants are listed in evaluation order: the validator reports the first
//! rule that fails.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    #[error("day must be between 1 and 31")]
    DayOutOfRange,

    #[error("month must be between 1 and 12")]
    MonthOutOfRange,

    #[error("year must not be later than the current year")]
    YearTooLarge,

    #[error("day does not exist in the given month")]
    InvalidDayForMonth,

    #[error("date must not be in the future")]
    InFuture,
}
