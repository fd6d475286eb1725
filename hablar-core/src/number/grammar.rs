//! Grammar-constrained number parsing
//!
//! Recognizes well-formed cardinal phrases only:
//!
//! ```text
//! number     := zero | [hundreds] [multiplier [hundreds]]
//! hundreds   := hundred [tens] | tens
//! tens       := unit-or-teen | ten [and unit]
//! ```
//!
//! A rule that fails leaves the index where it was.

use crate::language::Lexicon;

/// Parse one number phrase starting at `index`
///
/// Returns the value and the index just past the phrase, or `None` when no
/// phrase starts there. `tokens` are expected in lowercase.
///
/// ```
/// use hablar_core::{get_lexicon, number::parse_number_at};
///
/// let es = get_lexicon("es").unwrap();
/// let tokens = ["dos", "mil", "trescientos", "casas"];
/// assert_eq!(parse_number_at(&es, &tokens, 0), Some((2300, 3)));
/// assert_eq!(parse_number_at(&es, &tokens, 3), None);
/// ```
pub fn parse_number_at(lexicon: &Lexicon, tokens: &[&str], index: usize) -> Option<(i64, usize)> {
    if value_at(lexicon, tokens, index) == Some(0) {
        return Some((0, index + 1));
    }

    let first = number_1_999(lexicon, tokens, index);
    let after_first = first.map_or(index, |(_, next)| next);

    let multiplier = tokens
        .get(after_first)
        .filter(|t| lexicon.numbers().is_multiplier(t))
        .and_then(|t| lexicon.number(t));
    let Some(multiplier) = multiplier else {
        return first;
    };

    let after_multiplier = after_first + 1;
    match (first, number_1_999(lexicon, tokens, after_multiplier)) {
        (Some((v1, _)), Some((v2, next))) => Some((v1 * multiplier + v2, next)),
        (Some((v1, _)), None) => Some((v1 * multiplier, after_multiplier)),
        (None, Some((v2, next))) => Some((multiplier + v2, next)),
        (None, None) => Some((multiplier, after_multiplier)),
    }
}

/// Rewrite every number phrase in `text` as digits
///
/// Definite articles are dropped when `remove_articles` is set. Tokens are
/// joined by single spaces; running the result through again changes nothing.
///
/// ```
/// use hablar_core::{get_lexicon, number::normalize};
///
/// let es = get_lexicon("es").unwrap();
/// assert_eq!(normalize(&es, "la casa tiene treinta y dos ventanas", true), "casa tiene 32 ventanas");
/// ```
pub fn normalize(lexicon: &Lexicon, text: &str, remove_articles: bool) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let keys: Vec<&str> = lowered.iter().map(String::as_str).collect();

    let mut normalized: Vec<String> = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        if remove_articles && lexicon.numbers().is_article(keys[i]) {
            i += 1;
            continue;
        }
        match parse_number_at(lexicon, &keys, i) {
            Some((value, next)) => {
                normalized.push(value.to_string());
                i = next;
            }
            None => {
                normalized.push(words[i].to_string());
                i += 1;
            }
        }
    }

    normalized.join(" ")
}

fn value_at(lexicon: &Lexicon, tokens: &[&str], index: usize) -> Option<i64> {
    tokens.get(index).and_then(|t| lexicon.number(t))
}

fn number_1_99(lexicon: &Lexicon, tokens: &[&str], index: usize) -> Option<(i64, usize)> {
    let value = value_at(lexicon, tokens, index)?;

    if (1..30).contains(&value) {
        return Some((value, index + 1));
    }

    if (30..100).contains(&value) && value % 10 == 0 {
        let joined = tokens
            .get(index + 1)
            .is_some_and(|t| lexicon.numbers().is_and(t));
        if joined {
            if let Some(unit) = value_at(lexicon, tokens, index + 2).filter(|u| (1..10).contains(u)) {
                return Some((value + unit, index + 3));
            }
        }
        return Some((value, index + 1));
    }

    None
}

fn number_1_999(lexicon: &Lexicon, tokens: &[&str], index: usize) -> Option<(i64, usize)> {
    if let Some(hundreds) = value_at(lexicon, tokens, index)
        .filter(|v| (100..1000).contains(v) && v % 100 == 0)
    {
        return match number_1_99(lexicon, tokens, index + 1) {
            Some((rest, next)) => Some((hundreds + rest, next)),
            None => Some((hundreds, index + 1)),
        };
    }

    number_1_99(lexicon, tokens, index)
}
