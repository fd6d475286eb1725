//! Relative date words: today/tomorrow phrases and next/previous modifiers

use super::{PhraseTable, WordSet};
use crate::language::config::RelativeConfig;

/// A phrase such as "pasado mañana" with its day offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeDay {
    pub offset: i64,
    /// Only fires when not preceded by a numeral and no relative day fired yet
    pub ambiguous: bool,
    /// Only meaningful after a from word
    pub anchor_only: bool,
}

#[derive(Debug, Clone)]
pub struct RelativeTable {
    days: PhraseTable<RelativeDay>,
    next_before: WordSet,
    last_before: WordSet,
    next_after: WordSet,
    last_after: WordSet,
    forward: WordSet,
    backward: WordSet,
    from: WordSet,
    weekday_next: WordSet,
    weekday_last: WordSet,
    day_suffixes: WordSet,
}

impl RelativeTable {
    pub fn from_config(config: &RelativeConfig) -> Self {
        let days = PhraseTable::new(config.days.iter().map(|day| {
            (
                day.phrase.as_str(),
                RelativeDay {
                    offset: day.offset,
                    ambiguous: day.ambiguous,
                    anchor_only: day.anchor_only,
                },
            )
        }));

        Self {
            days,
            next_before: WordSet::new(&config.next_before),
            last_before: WordSet::new(&config.last_before),
            next_after: WordSet::new(&config.next_after),
            last_after: WordSet::new(&config.last_after),
            forward: WordSet::new(&config.forward),
            backward: WordSet::new(&config.backward),
            from: WordSet::new(&config.from),
            weekday_next: WordSet::new(&config.weekday_next),
            weekday_last: WordSet::new(&config.weekday_last),
            day_suffixes: WordSet::new(&config.day_suffixes),
        }
    }

    pub fn days(&self) -> &PhraseTable<RelativeDay> {
        &self.days
    }

    pub fn is_next_before(&self, word: &str) -> bool {
        self.next_before.contains(word)
    }

    pub fn is_last_before(&self, word: &str) -> bool {
        self.last_before.contains(word)
    }

    pub fn is_next_after(&self, word: &str) -> bool {
        self.next_after.contains(word)
    }

    pub fn is_last_after(&self, word: &str) -> bool {
        self.last_after.contains(word)
    }

    pub fn is_forward(&self, word: &str) -> bool {
        self.forward.contains(word)
    }

    pub fn is_backward(&self, word: &str) -> bool {
        self.backward.contains(word)
    }

    pub fn is_from(&self, word: &str) -> bool {
        self.from.contains(word)
    }

    pub fn is_weekday_next(&self, word: &str) -> bool {
        self.weekday_next.contains(word)
    }

    pub fn is_weekday_last(&self, word: &str) -> bool {
        self.weekday_last.contains(word)
    }

    pub fn is_day_suffix(&self, word: &str) -> bool {
        self.day_suffixes.contains(word)
    }
}
