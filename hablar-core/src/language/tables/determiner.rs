//! Determiners with a fixed grammatical gender

use super::WordSet;
use crate::gender::Gender;
use crate::language::config::GenderConfig;

#[derive(Debug, Clone, Default)]
pub struct DeterminerTable {
    masculine: WordSet,
    feminine: WordSet,
}

impl DeterminerTable {
    pub fn from_config(config: &GenderConfig) -> Self {
        Self {
            masculine: WordSet::new(&config.masculine),
            feminine: WordSet::new(&config.feminine),
        }
    }

    pub fn gender(&self, word: &str) -> Option<Gender> {
        if self.masculine.contains(word) {
            Some(Gender::Masculine)
        } else if self.feminine.contains(word) {
            Some(Gender::Feminine)
        } else {
            None
        }
    }
}
