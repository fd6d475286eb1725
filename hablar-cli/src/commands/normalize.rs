//! Normalize command implementation

use anyhow::Result;
use clap::Args;
use hablar_core::Parser;

use super::Session;
use crate::output::{Outcome, Record};

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Text to rewrite
    #[arg(required = true, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Drop definite articles (el, la, los, las)
    #[arg(short = 'a', long)]
    pub remove_articles: bool,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self, session: &Session) -> Result<()> {
        let parser = session.parser()?;
        let input = self.text.join(" ");
        let remove_articles = self.remove_articles || session.config.processing.remove_articles;

        let outcome = rewrite(&parser, &input, remove_articles);
        session.emit(&[Record { input, outcome }], None)
    }
}

pub fn rewrite(parser: &Parser, text: &str, remove_articles: bool) -> Outcome {
    Outcome::Normalized {
        text: parser.normalize(text, remove_articles),
    }
}
