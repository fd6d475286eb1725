//! Datetime command implementation

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;
use hablar_core::Parser;

use super::Session;
use crate::error::CliError;
use crate::output::{Outcome, Record};

/// Format accepted by `--reference`
pub const REFERENCE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Arguments for the datetime command
#[derive(Debug, Args)]
pub struct DatetimeArgs {
    /// Phrase holding the date or time
    #[arg(required = true, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Reference "now" as YYYY-MM-DD HH:MM:SS (default: local time)
    #[arg(short = 'r', long, value_name = "TIME", value_parser = parse_reference)]
    pub reference: Option<NaiveDateTime>,
}

impl DatetimeArgs {
    /// Execute the datetime command
    pub fn execute(&self, session: &Session) -> Result<()> {
        let parser = session.parser()?;
        let input = self.text.join(" ");

        let outcome = extract(&parser, &input, self.reference);
        session.emit(&[Record { input, outcome }], None)
    }
}

pub fn extract(parser: &Parser, text: &str, reference: Option<NaiveDateTime>) -> Outcome {
    Outcome::datetime(parser.extract_datetime(text, reference))
}

/// Parse a `--reference` value
pub fn parse_reference(value: &str) -> Result<NaiveDateTime, CliError> {
    NaiveDateTime::parse_from_str(value.trim(), REFERENCE_FORMAT)
        .map_err(|_| CliError::InvalidReference(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_reference() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 6)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(parse_reference("2024-03-06 10:00:00").unwrap(), expected);
        assert!(matches!(
            parse_reference("2024-03-06"),
            Err(CliError::InvalidReference(_))
        ));
    }

    #[test]
    fn test_extract_with_reference() {
        let parser = Parser::with_language("es").unwrap();
        let reference = parse_reference("2024-03-06 10:00:00").unwrap();
        assert_eq!(
            extract(&parser, "mañana a las 5 de la tarde", Some(reference)).to_text(),
            "2024-03-07 17:00:00"
        );
        assert_eq!(extract(&parser, "hola", Some(reference)).to_text(), "-");
    }
}
