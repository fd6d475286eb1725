//! Date/time phrase normalization tables

use std::collections::HashMap;

use super::{PhraseTable, WordSet};
use crate::language::config::NormalizationConfig;

#[derive(Debug, Clone, Default)]
pub struct NormalizationTable {
    symbols: Vec<String>,
    noise: WordSet,
    synonyms: PhraseTable<String>,
    singular: HashMap<String, String>,
}

impl NormalizationTable {
    pub fn from_config(config: &NormalizationConfig) -> Self {
        let synonyms = PhraseTable::new(config.synonyms.iter().flat_map(|syn| {
            syn.variants
                .iter()
                .map(move |variant| (variant.as_str(), syn.canonical.to_lowercase()))
        }));

        Self {
            symbols: config.symbols.clone(),
            noise: WordSet::new(&config.noise_words),
            synonyms,
            singular: config
                .singular
                .iter()
                .map(|(plural, single)| (plural.to_lowercase(), single.to_lowercase()))
                .collect(),
        }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn is_noise(&self, word: &str) -> bool {
        self.noise.contains(word)
    }

    pub fn synonyms(&self) -> &PhraseTable<String> {
        &self.synonyms
    }

    /// Singular form of a known plural, or the word itself
    pub fn singular<'a>(&'a self, word: &'a str) -> &'a str {
        self.singular.get(word).map_or(word, String::as_str)
    }
}
