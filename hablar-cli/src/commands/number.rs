//! Number command implementation

use anyhow::Result;
use clap::Args;
use hablar_core::{Number, Parser};

use super::Session;
use crate::output::{Outcome, Record};

/// Arguments for the number command
#[derive(Debug, Args)]
pub struct NumberArgs {
    /// Phrase holding the number
    #[arg(required = true, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Decompose a single run-together numeral (e.g. doscientoscinco)
    #[arg(long, conflicts_with = "fraction")]
    pub long: bool,

    /// Read a single fraction word (e.g. tercio, cuartos)
    #[arg(long)]
    pub fraction: bool,
}

impl NumberArgs {
    /// Execute the number command
    pub fn execute(&self, session: &Session) -> Result<()> {
        let parser = session.parser()?;
        let input = self.text.join(" ");

        let outcome = if self.long {
            Outcome::Number {
                value: parser.extract_number_long(&input).map(Number::Integer),
            }
        } else if self.fraction {
            Outcome::Fraction {
                value: parser.is_fractional(&input),
            }
        } else {
            read(&parser, &input)
        };

        session.emit(&[Record { input, outcome }], None)
    }
}

/// Number written in `text`
pub fn read(parser: &Parser, text: &str) -> Outcome {
    Outcome::Number {
        value: parser.extract_number(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read() {
        let parser = Parser::with_language("es").unwrap();
        assert_eq!(
            read(&parser, "dos mil trescientos cuarenta y cinco").to_text(),
            "2345"
        );
        assert_eq!(read(&parser, "hola").to_text(), "-");
    }
}
