//! Weekday and month names

use crate::language::config::CalendarConfig;

#[derive(Debug, Clone)]
pub struct CalendarTable {
    weekdays: Vec<String>,
    months: Vec<String>,
    months_short: Vec<String>,
    day_word: String,
    week_word: String,
    month_word: String,
    year_word: String,
}

impl CalendarTable {
    pub fn from_config(config: &CalendarConfig) -> Self {
        let lower = |words: &[String]| words.iter().map(|w| w.to_lowercase()).collect();
        Self {
            weekdays: lower(&config.weekdays),
            months: lower(&config.months),
            months_short: lower(&config.months_short),
            day_word: config.day_word.to_lowercase(),
            week_word: config.week_word.to_lowercase(),
            month_word: config.month_word.to_lowercase(),
            year_word: config.year_word.to_lowercase(),
        }
    }

    /// Monday is 0
    pub fn weekday_index(&self, word: &str) -> Option<usize> {
        self.weekdays.iter().position(|w| w == word)
    }

    /// January is 0; full names and abbreviations both match
    pub fn month_index(&self, word: &str) -> Option<usize> {
        self.months
            .iter()
            .position(|m| m == word)
            .or_else(|| self.months_short.iter().position(|m| m == word))
    }

    pub fn is_month(&self, word: &str) -> bool {
        self.month_index(word).is_some()
    }

    pub fn weekdays(&self) -> &[String] {
        &self.weekdays
    }

    pub fn months(&self) -> &[String] {
        &self.months
    }

    pub fn is_day_word(&self, word: &str) -> bool {
        word == self.day_word
    }

    pub fn is_week_word(&self, word: &str) -> bool {
        word == self.week_word
    }

    pub fn is_month_word(&self, word: &str) -> bool {
        word == self.month_word
    }

    pub fn is_year_word(&self, word: &str) -> bool {
        word == self.year_word
    }
}
