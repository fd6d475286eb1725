//! Phrase normalization ahead of the date and time passes

use crate::language::tables::NormalizationTable;

/// Lowercase, strip symbols, drop noise words, rewrite synonyms and
/// singularize plurals
///
/// Noise words are dropped before plurals are folded, so "las" survives as
/// "la" while a literal "la" does not.
pub fn clean_tokens(table: &NormalizationTable, text: &str) -> Vec<String> {
    let mut cleaned = text.to_lowercase();
    for symbol in table.symbols() {
        cleaned = cleaned.replace(symbol.as_str(), "");
    }
    let cleaned = cleaned.replace('-', " ").replace('_', "");

    let words: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|word| !table.is_noise(word))
        .collect();

    let mut tokens = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        match table.synonyms().longest_match(&words[i..]) {
            Some((canonical, len)) => {
                tokens.push(canonical.clone());
                i += len;
            }
            None => {
                tokens.push(table.singular(words[i]).to_string());
                i += 1;
            }
        }
    }

    tokens
}
