//! Number word table

use std::collections::HashMap;

use super::WordSet;
use crate::language::config::NumberConfig;

/// Cardinal/ordinal lookup plus the glue words of number phrases
#[derive(Debug, Clone)]
pub struct NumberTable {
    values: HashMap<String, i64>,
    /// Same words, longest first, for suffix decomposition
    by_length: Vec<(String, i64)>,
    multiplier: String,
    and_words: WordSet,
    decimal_markers: WordSet,
    zero_fillers: WordSet,
    articles: WordSet,
}

impl NumberTable {
    pub fn from_config(config: &NumberConfig) -> Self {
        let values: HashMap<String, i64> = config
            .words
            .iter()
            .map(|(word, value)| (word.to_lowercase(), *value))
            .collect();

        let mut by_length: Vec<(String, i64)> =
            values.iter().map(|(w, v)| (w.clone(), *v)).collect();
        // Ties broken alphabetically so decomposition is deterministic
        by_length.sort_by(|a, b| {
            b.0.chars()
                .count()
                .cmp(&a.0.chars().count())
                .then_with(|| a.0.cmp(&b.0))
        });

        Self {
            values,
            by_length,
            multiplier: config.multiplier.to_lowercase(),
            and_words: WordSet::new(&config.and_words),
            decimal_markers: WordSet::new(&config.decimal_markers),
            zero_fillers: WordSet::new(&config.zero_fillers),
            articles: WordSet::new(&config.articles),
        }
    }

    #[inline]
    pub fn value(&self, word: &str) -> Option<i64> {
        self.values.get(word).copied()
    }

    pub fn multiplier(&self) -> &str {
        &self.multiplier
    }

    #[inline]
    pub fn is_multiplier(&self, word: &str) -> bool {
        word == self.multiplier
    }

    #[inline]
    pub fn is_and(&self, word: &str) -> bool {
        self.and_words.contains(word)
    }

    #[inline]
    pub fn is_decimal_marker(&self, word: &str) -> bool {
        self.decimal_markers.contains(word)
    }

    #[inline]
    pub fn is_zero_filler(&self, word: &str) -> bool {
        self.zero_fillers.contains(word)
    }

    #[inline]
    pub fn is_article(&self, word: &str) -> bool {
        self.articles.contains(word)
    }

    /// Every number word with its value, longest word first
    pub fn longest_first(&self) -> impl Iterator<Item = (&str, i64)> {
        self.by_length.iter().map(|(w, v)| (w.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn table() -> NumberTable {
        let words: BTreeMap<String, i64> = [("dos", 2), ("doscientos", 200), ("mil", 1000)]
            .into_iter()
            .map(|(w, v)| (w.to_string(), v))
            .collect();
        NumberTable::from_config(&NumberConfig {
            multiplier: "mil".to_string(),
            and_words: vec!["y".to_string()],
            decimal_markers: vec!["punto".to_string()],
            zero_fillers: vec!["cero".to_string()],
            articles: vec!["el".to_string()],
            words,
        })
    }

    #[test]
    fn test_lookup() {
        let table = table();
        assert_eq!(table.value("dos"), Some(2));
        assert_eq!(table.value("tres"), None);
        assert!(table.is_multiplier("mil"));
        assert!(table.is_and("y"));
        assert!(table.is_decimal_marker("punto"));
        assert!(table.is_zero_filler("cero"));
        assert!(table.is_article("el"));
    }

    #[test]
    fn test_longest_first_order() {
        let table = table();
        let words: Vec<&str> = table.longest_first().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["doscientos", "dos", "mil"]);
    }
}
