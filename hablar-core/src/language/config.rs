//! Lexicon configuration schema
//!
//! Mirrors the layout of `configs/languages/*.toml`. A config is validated
//! here and compiled into a runtime [`Lexicon`](super::Lexicon) by the
//! tables in [`super::tables`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: MetadataConfig,
    pub numbers: NumberConfig,
    pub fractions: FractionConfig,
    pub calendar: CalendarConfig,
    pub relative: RelativeConfig,
    pub time: TimeConfig,
    #[serde(default)]
    pub normalization: NormalizationConfig,
    #[serde(default)]
    pub gender: GenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

/// Cardinal and ordinal words plus the number-phrase glue words
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberConfig {
    /// Word that multiplies the running value by its own value ("mil")
    pub multiplier: String,
    pub and_words: Vec<String>,
    pub decimal_markers: Vec<String>,
    pub zero_fillers: Vec<String>,
    #[serde(default)]
    pub articles: Vec<String>,
    pub words: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractionConfig {
    /// Position `p` has divisor `p + 2`
    pub groups: Vec<Vec<String>>,
    /// Position `p` has divisor `(p + 2) * 10`
    #[serde(default)]
    pub tens_groups: Vec<Vec<String>>,
    #[serde(default)]
    pub fixed: Vec<FixedFraction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedFraction {
    pub words: Vec<String>,
    pub divisor: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Monday first
    pub weekdays: Vec<String>,
    /// January first
    pub months: Vec<String>,
    pub months_short: Vec<String>,
    pub day_word: String,
    pub week_word: String,
    pub month_word: String,
    pub year_word: String,
}

/// Words that move a date relative to the reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelativeConfig {
    pub next_before: Vec<String>,
    pub last_before: Vec<String>,
    pub next_after: Vec<String>,
    pub last_after: Vec<String>,
    pub forward: Vec<String>,
    pub backward: Vec<String>,
    pub from: Vec<String>,
    #[serde(default)]
    pub weekday_next: Vec<String>,
    #[serde(default)]
    pub weekday_last: Vec<String>,
    #[serde(default)]
    pub day_suffixes: Vec<String>,
    #[serde(default)]
    pub days: Vec<RelativeDayConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelativeDayConfig {
    pub phrase: String,
    pub offset: i64,
    #[serde(default)]
    pub ambiguous: bool,
    #[serde(default)]
    pub anchor_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeConfig {
    pub indicators: Vec<String>,
    pub qualifiers: Vec<String>,
    pub hour_word: String,
    pub minute_word: String,
    pub second_word: String,
    pub half_word: String,
    pub quarter_word: String,
    pub am: Vec<String>,
    pub pm: Vec<String>,
    #[serde(default)]
    pub morning: Vec<String>,
    #[serde(default)]
    pub afternoon: Vec<String>,
    #[serde(default)]
    pub night: Vec<String>,
    #[serde(default)]
    pub noon: Vec<String>,
    #[serde(default)]
    pub midnight: Vec<String>,
    #[serde(default)]
    pub on_the_hour: String,
    #[serde(default)]
    pub clock_prefixes: Vec<String>,
    #[serde(default)]
    pub military_prefixes: Vec<String>,
    #[serde(default)]
    pub this: Vec<String>,
    #[serde(default)]
    pub early: Vec<String>,
    #[serde(default)]
    pub late: Vec<String>,
    #[serde(default)]
    pub idioms: Vec<TimeIdiomConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeIdiomConfig {
    pub phrase: String,
    pub hour: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizationConfig {
    #[serde(default)]
    pub symbols: Vec<String>,
    #[serde(default)]
    pub noise_words: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<SynonymConfig>,
    #[serde(default)]
    pub singular: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymConfig {
    pub canonical: String,
    pub variants: Vec<String>,
}

/// Determiners that fix the gender of the following noun
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenderConfig {
    #[serde(default)]
    pub masculine: Vec<String>,
    #[serde(default)]
    pub feminine: Vec<String>,
}

impl LexiconConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("Language code cannot be empty".to_string());
        }
        if self.metadata.name.is_empty() {
            return Err("Language name cannot be empty".to_string());
        }

        if self.calendar.weekdays.len() != 7 {
            return Err(format!(
                "Expected 7 weekdays, found {}",
                self.calendar.weekdays.len()
            ));
        }
        if self.calendar.months.len() != 12 {
            return Err(format!(
                "Expected 12 months, found {}",
                self.calendar.months.len()
            ));
        }
        if self.calendar.months_short.len() != 12 {
            return Err(format!(
                "Expected 12 month abbreviations, found {}",
                self.calendar.months_short.len()
            ));
        }

        if self.fractions.groups.is_empty() {
            return Err("At least one fraction group is required".to_string());
        }
        for fixed in &self.fractions.fixed {
            if fixed.divisor == 0 {
                return Err(format!("Fraction {:?} has a zero divisor", fixed.words));
            }
        }

        if !self.numbers.words.contains_key(&self.numbers.multiplier) {
            return Err(format!(
                "Multiplier '{}' is missing from the number table",
                self.numbers.multiplier
            ));
        }
        if let Some((word, value)) = self.numbers.words.iter().find(|(_, v)| **v < 0) {
            return Err(format!("Number word '{word}' has negative value {value}"));
        }

        for idiom in &self.time.idioms {
            if idiom.hour > 23 {
                return Err(format!(
                    "Time idiom '{}' has invalid hour {}",
                    idiom.phrase, idiom.hour
                ));
            }
        }

        Ok(())
    }
}
