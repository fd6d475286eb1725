//! Runtime tables for the lexicon
//!
//! Tables are built once from a validated config; lookups never allocate.

pub mod calendar;
pub mod determiner;
pub mod fractions;
pub mod normalization;
pub mod numbers;
pub mod relative;
pub mod time;

pub use calendar::CalendarTable;
pub use determiner::DeterminerTable;
pub use fractions::FractionTable;
pub use normalization::NormalizationTable;
pub use numbers::NumberTable;
pub use relative::{RelativeDay, RelativeTable};
pub use time::TimeTable;

use std::collections::HashSet;

/// Set of lowercase words
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.words.contains(word)
    }
}

/// Multi-word phrases matched token by token, longest phrase first
#[derive(Debug, Clone)]
pub struct PhraseTable<T> {
    entries: Vec<(Vec<String>, T)>,
}

impl<T> Default for PhraseTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> PhraseTable<T> {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut entries: Vec<(Vec<String>, T)> = entries
            .into_iter()
            .map(|(phrase, value)| {
                let tokens = phrase
                    .as_ref()
                    .split_whitespace()
                    .map(str::to_lowercase)
                    .collect();
                (tokens, value)
            })
            .filter(|(tokens, _): &(Vec<String>, T)| !tokens.is_empty())
            .collect();
        // Stable: equal-length phrases keep their config order
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { entries }
    }

    /// Longest phrase that is a prefix of `window`, with its token count
    pub fn longest_match(&self, window: &[&str]) -> Option<(&T, usize)> {
        self.entries
            .iter()
            .find(|(tokens, _)| {
                tokens.len() <= window.len()
                    && tokens.iter().zip(window).all(|(t, w)| t == w)
            })
            .map(|(tokens, value)| (value, tokens.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_set() {
        let set = WordSet::new(["En", "la"]);
        assert!(set.contains("en"));
        assert!(set.contains("la"));
        assert!(!set.contains("En"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_phrase_table_prefers_longest() {
        let table = PhraseTable::new([("mañana", 1), ("pasado mañana", 2)]);
        assert_eq!(table.longest_match(&["pasado", "mañana"]), Some((&2, 2)));
        assert_eq!(table.longest_match(&["mañana", "pasado"]), Some((&1, 1)));
        assert_eq!(table.longest_match(&["pasado"]), None);
    }

    #[test]
    fn test_phrase_table_skips_empty_window_slots() {
        let table = PhraseTable::new([("ante ayer", -2)]);
        assert_eq!(table.longest_match(&["ante", ""]), None);
    }
}
