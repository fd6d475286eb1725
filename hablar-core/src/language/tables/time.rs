//! Clock words, meridiem words and time-of-day idioms

use super::{PhraseTable, WordSet};
use crate::language::config::TimeConfig;

/// Meridiem implied by a word such as "tarde" or "pm"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
    /// "noche": early hours are am, the rest pm
    Night,
}

impl Meridiem {
    /// Convert a 12-hour clock reading to 24 hours
    pub fn apply(self, hour: u32) -> u32 {
        match self {
            Meridiem::Pm if hour > 0 && hour < 12 => hour + 12,
            Meridiem::Am if hour >= 12 => hour - 12,
            Meridiem::Night if hour < 6 => hour,
            Meridiem::Night if hour < 12 => hour + 12,
            _ => hour,
        }
    }
}

/// Noon or midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedTime {
    Noon,
    Midnight,
}

impl FixedTime {
    pub fn hour(self) -> u32 {
        match self {
            FixedTime::Noon => 12,
            FixedTime::Midnight => 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TimeTable {
    indicators: WordSet,
    qualifiers: WordSet,
    hour_word: String,
    minute_word: String,
    second_word: String,
    half_word: String,
    quarter_word: String,
    am: WordSet,
    pm: WordSet,
    morning: WordSet,
    afternoon: WordSet,
    night: WordSet,
    fixed: PhraseTable<FixedTime>,
    idioms: PhraseTable<u32>,
    on_the_hour: Vec<String>,
    clock_prefixes: WordSet,
    military_prefixes: WordSet,
    this: WordSet,
    early: WordSet,
    late: WordSet,
}

impl TimeTable {
    pub fn from_config(config: &TimeConfig) -> Self {
        let fixed = PhraseTable::new(
            config
                .noon
                .iter()
                .map(|p| (p.as_str(), FixedTime::Noon))
                .chain(config.midnight.iter().map(|p| (p.as_str(), FixedTime::Midnight))),
        );
        let idioms = PhraseTable::new(config.idioms.iter().map(|i| (i.phrase.as_str(), i.hour)));

        Self {
            indicators: WordSet::new(&config.indicators),
            qualifiers: WordSet::new(&config.qualifiers),
            hour_word: config.hour_word.to_lowercase(),
            minute_word: config.minute_word.to_lowercase(),
            second_word: config.second_word.to_lowercase(),
            half_word: config.half_word.to_lowercase(),
            quarter_word: config.quarter_word.to_lowercase(),
            am: WordSet::new(&config.am),
            pm: WordSet::new(&config.pm),
            morning: WordSet::new(&config.morning),
            afternoon: WordSet::new(&config.afternoon),
            night: WordSet::new(&config.night),
            fixed,
            idioms,
            on_the_hour: config
                .on_the_hour
                .split_whitespace()
                .map(str::to_lowercase)
                .collect(),
            clock_prefixes: WordSet::new(&config.clock_prefixes),
            military_prefixes: WordSet::new(&config.military_prefixes),
            this: WordSet::new(&config.this),
            early: WordSet::new(&config.early),
            late: WordSet::new(&config.late),
        }
    }

    pub fn is_indicator(&self, word: &str) -> bool {
        self.indicators.contains(word)
    }

    pub fn is_qualifier(&self, word: &str) -> bool {
        self.qualifiers.contains(word)
    }

    pub fn is_hour_word(&self, word: &str) -> bool {
        word == self.hour_word
    }

    pub fn is_minute_word(&self, word: &str) -> bool {
        word == self.minute_word
    }

    pub fn is_second_word(&self, word: &str) -> bool {
        word == self.second_word
    }

    pub fn is_half_word(&self, word: &str) -> bool {
        word == self.half_word
    }

    pub fn is_quarter_word(&self, word: &str) -> bool {
        word == self.quarter_word
    }

    /// Meridiem carried by an explicit am/pm word
    pub fn explicit_meridiem(&self, word: &str) -> Option<Meridiem> {
        if self.am.contains(word) {
            Some(Meridiem::Am)
        } else if self.pm.contains(word) {
            Some(Meridiem::Pm)
        } else {
            None
        }
    }

    /// Meridiem implied by a time-of-day word
    pub fn idiom_meridiem(&self, word: &str) -> Option<Meridiem> {
        if self.morning.contains(word) {
            Some(Meridiem::Am)
        } else if self.afternoon.contains(word) {
            Some(Meridiem::Pm)
        } else if self.night.contains(word) {
            Some(Meridiem::Night)
        } else {
            None
        }
    }

    pub fn fixed_times(&self) -> &PhraseTable<FixedTime> {
        &self.fixed
    }

    pub fn idioms(&self) -> &PhraseTable<u32> {
        &self.idioms
    }

    /// Tokens of the "on the hour" phrase ("en punto")
    pub fn on_the_hour(&self) -> &[String] {
        &self.on_the_hour
    }

    pub fn is_clock_prefix(&self, word: &str) -> bool {
        self.clock_prefixes.contains(word)
    }

    pub fn is_military_prefix(&self, word: &str) -> bool {
        self.military_prefixes.contains(word)
    }

    pub fn is_this(&self, word: &str) -> bool {
        self.this.contains(word)
    }

    pub fn is_early(&self, word: &str) -> bool {
        self.early.contains(word)
    }

    pub fn is_late(&self, word: &str) -> bool {
        self.late.contains(word)
    }
}
