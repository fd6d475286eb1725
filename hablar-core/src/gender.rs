//! Grammatical gender of a noun
//!
//! A rough guess: the determiner in front of the word when a sentence is
//! given, otherwise the word's last letter.

use serde::Serialize;
use std::fmt;

use crate::language::Lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    #[serde(rename = "m")]
    Masculine,
    #[serde(rename = "f")]
    Feminine,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Masculine => "m",
            Gender::Feminine => "f",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guess the gender of `word`, optionally looking at the sentence it came from
///
/// Trailing `s` are ignored. When `word` appears in `context` after another
/// token, that token decides first (only one level deep).
///
/// ```
/// use hablar_core::{get_lexicon, infer_gender, Gender};
///
/// let es = get_lexicon("es").unwrap();
/// assert_eq!(infer_gender(&es, "casa", None), Some(Gender::Feminine));
/// assert_eq!(infer_gender(&es, "mapa", Some("el mapa")), Some(Gender::Masculine));
/// assert_eq!(infer_gender(&es, "reloj", None), None);
/// ```
pub fn infer_gender(lexicon: &Lexicon, word: &str, context: Option<&str>) -> Option<Gender> {
    let word = word.trim().to_lowercase();
    let stem = word.trim_end_matches('s');

    let from_context = context.and_then(|context| {
        let context = context.to_lowercase();
        let tokens: Vec<&str> = context.split_whitespace().collect();
        let (position, _) = tokens
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, t)| **t == word || **t == stem || t.trim_end_matches('s') == stem)?;
        let previous = tokens[position - 1];
        log::trace!("gender of '{word}' from preceding '{previous}'");
        lexicon
            .determiners()
            .gender(previous)
            .or_else(|| by_ending(previous.trim_end_matches('s')))
    });

    from_context.or_else(|| by_ending(stem))
}

fn by_ending(stem: &str) -> Option<Gender> {
    match stem.chars().last()? {
        'a' => Some(Gender::Feminine),
        'o' | 'e' => Some(Gender::Masculine),
        _ => None,
    }
}
