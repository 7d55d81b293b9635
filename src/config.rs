use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};

use crate::form::FormFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "agecalc", about = "Compute an age in years, months and days from a birthdate")]
pub struct CliArgs {
    /// Day of birth (1-31)
    #[arg(long, default_value = "")]
    pub day: String,

    /// Month of birth (1-12)
    #[arg(long, default_value = "")]
    pub month: String,

    /// Year of birth
    #[arg(long, default_value = "")]
    pub year: String,

    /// Reference date as YYYY-MM-DD; defaults to the local date
    #[arg(long, env = "AGECALC_TODAY")]
    pub today: Option<String>,

    #[arg(long, value_enum, env = "AGECALC_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub fields: FormFields,
    pub today: NaiveDate,
    pub format: OutputFormat,
}

impl Config {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            day,
            month,
            year,
            today,
            format,
        } = args;

        let today = match today.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .with_context(|| format!("invalid reference date '{raw}', expected YYYY-MM-DD"))?,
            _ => Local::now().date_naive(),
        };

        Ok(Self {
            fields: FormFields::parse(&day, &month, &year),
            today,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["agecalc"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn explicit_today_is_used() {
        let config = Config::from_args(args(&[
            "--day", "15", "--month", "6", "--year", "2000", "--today", "2024-06-14",
        ]))
        .unwrap();
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap());
        assert_eq!(config.fields.components().map(|c| c.year), Some(2000));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn malformed_today_is_an_error() {
        let err = Config::from_args(args(&["--today", "14/06/2024"])).unwrap_err();
        assert!(err.to_string().contains("invalid reference date"));
    }

    #[test]
    fn omitted_fields_are_unfilled() {
        let config = Config::from_args(args(&["--day", "1", "--today", "2024-06-14"])).unwrap();
        assert_eq!(config.fields.components(), None);
    }

    #[test]
    fn json_format_flag() {
        let config =
            Config::from_args(args(&["--format", "json", "--today", "2024-06-14"])).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }
}
