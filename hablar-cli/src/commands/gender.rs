//! Gender command implementation

use anyhow::Result;
use clap::Args;
use hablar_core::Parser;

use super::Session;
use crate::output::{Outcome, Record};

/// Arguments for the gender command
#[derive(Debug, Args)]
pub struct GenderArgs {
    /// Noun to classify
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Sentence the noun appears in; its determiner decides when present
    #[arg(short = 'c', long, value_name = "TEXT")]
    pub context: Option<String>,
}

impl GenderArgs {
    /// Execute the gender command
    pub fn execute(&self, session: &Session) -> Result<()> {
        let parser = session.parser()?;
        let outcome = infer(&parser, &self.word, self.context.as_deref());
        session.emit(
            &[Record {
                input: self.word.clone(),
                outcome,
            }],
            None,
        )
    }
}

pub fn infer(parser: &Parser, word: &str, context: Option<&str>) -> Outcome {
    Outcome::Gender {
        gender: parser.infer_gender(word, context),
    }
}

/// Batch lines read as "determiner noun": the last word is classified in
/// the context of the whole line
pub fn infer_line(parser: &Parser, line: &str) -> Outcome {
    match line.split_whitespace().last() {
        Some(word) => infer(parser, word, Some(line)),
        None => Outcome::Gender { gender: None },
    }
}
