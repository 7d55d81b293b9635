//! Birthdate validation and elapsed-age arithmetic on the proleptic
//! Gregorian calendar.
//!
//! Every entry point takes the reference "today" explicitly; nothing reads
//! the clock.

pub mod age;
pub mod calendar;
pub mod config;
pub mod date;
pub mod error;
pub mod form;
pub mod logging;
pub mod validate;

pub use age::{Age, calculate_age};
pub use calendar::{days_in_month, is_leap_year};
pub use config::{CliArgs, Config, OutputFormat};
pub use date::{DateComponents, ValidatedDate};
pub use error::ErrorKind;
pub use form::{FormFields, FormState, recompute};
pub use logging::init_logging;
pub use validate::{ValidationOutcome, validate};
