//! Output formatting module

use anyhow::Result;
use chrono::NaiveDateTime;
use hablar_core::{DateTimeMatch, Gender, Number};
use serde::Serialize;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single result
    fn format_record(&mut self, record: &Record) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One result per line
    Text,
    /// JSON array of results with their input
    Json,
}

/// One processed input
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub input: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// What an engine made of the input
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Number {
        value: Option<Number>,
    },
    Fraction {
        value: Option<f64>,
    },
    Normalized {
        text: String,
    },
    Datetime {
        datetime: Option<NaiveDateTime>,
        remainder: Option<String>,
    },
    Gender {
        gender: Option<Gender>,
    },
}

impl Outcome {
    pub fn datetime(found: Option<DateTimeMatch>) -> Self {
        match found {
            Some(found) => Outcome::Datetime {
                datetime: Some(found.datetime),
                remainder: Some(found.remainder),
            },
            None => Outcome::Datetime {
                datetime: None,
                remainder: None,
            },
        }
    }

    /// Whether the engine found anything
    pub fn is_found(&self) -> bool {
        match self {
            Outcome::Number { value } => value.is_some(),
            Outcome::Fraction { value } => value.is_some(),
            Outcome::Normalized { .. } => true,
            Outcome::Datetime { datetime, .. } => datetime.is_some(),
            Outcome::Gender { gender } => gender.is_some(),
        }
    }

    /// Single-line rendering; "-" when nothing was found
    pub fn to_text(&self) -> String {
        const NOT_FOUND: &str = "-";
        match self {
            Outcome::Number { value } => value.map_or(NOT_FOUND.to_string(), |v| v.to_string()),
            Outcome::Fraction { value } => value.map_or(NOT_FOUND.to_string(), |v| v.to_string()),
            Outcome::Normalized { text } => text.clone(),
            Outcome::Datetime {
                datetime: Some(datetime),
                remainder,
            } => match remainder.as_deref() {
                Some(rest) if !rest.is_empty() => format!("{datetime}\t{rest}"),
                _ => datetime.to_string(),
            },
            Outcome::Datetime { datetime: None, .. } => NOT_FOUND.to_string(),
            Outcome::Gender { gender } => gender.map_or(NOT_FOUND.to_string(), |g| g.to_string()),
        }
    }
}
