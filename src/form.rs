//! Stateless recomputation for a day/month/year input form.
//!
//! The caller invokes [`recompute`] after every edit; nothing is retained
//! between calls.

use chrono::NaiveDate;
use serde::Serialize;

use crate::age::{Age, calculate_age};
use crate::config::OutputFormat;
use crate::date::DateComponents;
use crate::error::ErrorKind;
use crate::validate::validate;

/// Field values after parsing; `None` marks an empty or non-numeric field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormFields {
    pub day: Option<i32>,
    pub month: Option<i32>,
    pub year: Option<i32>,
}

impl FormFields {
    /// Parses raw field text. Surrounding whitespace is ignored.
    pub fn parse(day: &str, month: &str, year: &str) -> Self {
        Self {
            day: parse_field(day),
            month: parse_field(month),
            year: parse_field(year),
        }
    }

    /// All three fields as components, or `None` while any is unfilled.
    pub fn components(&self) -> Option<DateComponents> {
        Some(DateComponents::new(self.day?, self.month?, self.year?))
    }
}

fn parse_field(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FormState {
    /// At least one field is missing; not a calendar error.
    Unfilled,
    Invalid { error: ErrorKind },
    Computed { age: Age },
}

impl FormState {
    /// Process exit status: 0 computed, 1 calendar error, 2 unfilled.
    pub fn exit_code(&self) -> u8 {
        match self {
            FormState::Computed { .. } => 0,
            FormState::Invalid { .. } => 1,
            FormState::Unfilled => 2,
        }
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string(self),
            OutputFormat::Text => Ok(match self {
                FormState::Computed { age } => age.to_string(),
                FormState::Invalid { error } => error.to_string(),
                FormState::Unfilled => "all fields are required".to_string(),
            }),
        }
    }
}

pub fn recompute(fields: &FormFields, today: NaiveDate) -> FormState {
    let Some(components) = fields.components() else {
        return FormState::Unfilled;
    };
    match validate(components, today).into_result() {
        Ok(birthdate) => FormState::Computed {
            age: calculate_age(&birthdate, today),
        },
        Err(error) => FormState::Invalid { error },
    }
}
