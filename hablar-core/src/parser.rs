//! One lexicon, every engine

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::datetime::{self, DateTimeMatch};
use crate::error::Result;
use crate::gender::{self, Gender};
use crate::language::{get_lexicon, Lexicon};
use crate::number::{self, Number};

/// Entry point bundling a lexicon with the number, date/time and gender
/// engines
///
/// ```
/// use hablar_core::Parser;
///
/// let parser = Parser::with_language("es").unwrap();
/// assert_eq!(parser.normalize("tengo veinte años", false), "tengo 20 años");
/// assert_eq!(parser.language_name(), "Spanish");
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    lexicon: Arc<Lexicon>,
}

impl Parser {
    /// Create a parser for an embedded language ("es", "spanish")
    pub fn with_language(code: &str) -> Result<Self> {
        Ok(Self::from_lexicon(get_lexicon(code)?))
    }

    /// Create a parser over an already loaded lexicon
    pub fn from_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn language_code(&self) -> &str {
        self.lexicon.code()
    }

    pub fn language_name(&self) -> &str {
        self.lexicon.name()
    }

    pub fn extract_number(&self, text: &str) -> Option<Number> {
        number::extract_number(&self.lexicon, text)
    }

    pub fn extract_number_long(&self, word: &str) -> Option<i64> {
        number::extract_number_long(&self.lexicon, word)
    }

    pub fn is_fractional(&self, word: &str) -> Option<f64> {
        number::is_fractional(&self.lexicon, word)
    }

    pub fn parse_number_at(&self, tokens: &[&str], index: usize) -> Option<(i64, usize)> {
        number::parse_number_at(&self.lexicon, tokens, index)
    }

    pub fn normalize(&self, text: &str, remove_articles: bool) -> String {
        number::normalize(&self.lexicon, text, remove_articles)
    }

    pub fn extract_datetime(
        &self,
        text: &str,
        reference: Option<NaiveDateTime>,
    ) -> Option<DateTimeMatch> {
        datetime::extract_datetime(&self.lexicon, text, reference)
    }

    pub fn infer_gender(&self, word: &str, context: Option<&str>) -> Option<Gender> {
        gender::infer_gender(&self.lexicon, word, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_with_language() {
        let parser = Parser::with_language("ES").unwrap();
        assert_eq!(parser.language_code(), "es");

        let result = Parser::with_language("klingon");
        assert!(matches!(result, Err(CoreError::UnsupportedLanguage(_))));
    }

    #[test]
    fn test_delegation() {
        let parser = Parser::with_language("spanish").unwrap();
        assert_eq!(parser.extract_number("tres"), Some(Number::Integer(3)));
        assert_eq!(parser.extract_number_long("doscientoscinco"), Some(205));
        assert_eq!(parser.is_fractional("cuartos"), Some(0.25));
        assert_eq!(parser.parse_number_at(&["cinco", "mil"], 0), Some((5000, 2)));
        assert_eq!(parser.infer_gender("casa", None), Some(Gender::Feminine));
        assert!(parser.extract_datetime("ayer", None).is_some());
    }
}
