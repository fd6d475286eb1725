//! Runtime lexicon
//!
//! Compiles a validated [`LexiconConfig`] into the lookup tables used by the
//! number, date/time and gender engines.

use std::path::Path;

use crate::error::{CoreError, Result};
use crate::language::{
    config::LexiconConfig,
    tables::{
        CalendarTable, DeterminerTable, FractionTable, NormalizationTable, NumberTable,
        RelativeTable, TimeTable,
    },
};

/// Immutable per-locale word tables
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,

    numbers: NumberTable,
    fractions: FractionTable,
    calendar: CalendarTable,
    relative: RelativeTable,
    time: TimeTable,
    normalization: NormalizationTable,
    determiners: DeterminerTable,
}

impl Lexicon {
    /// Create from configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        config.validate().map_err(CoreError::InvalidLexicon)?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            numbers: NumberTable::from_config(&config.numbers),
            fractions: FractionTable::from_config(&config.fractions),
            calendar: CalendarTable::from_config(&config.calendar),
            relative: RelativeTable::from_config(&config.relative),
            time: TimeTable::from_config(&config.time),
            normalization: NormalizationTable::from_config(&config.normalization),
            determiners: DeterminerTable::from_config(&config.gender),
        })
    }

    /// Parse and compile a TOML lexicon
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: LexiconConfig = toml::from_str(source)
            .map_err(|e| CoreError::Configuration(format!("Failed to parse lexicon: {e}")))?;
        Self::from_config(&config)
    }

    /// Load an external lexicon file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config: LexiconConfig = toml::from_str(&source).map_err(|e| {
            CoreError::Configuration(format!("Failed to parse {}: {e}", path.display()))
        })?;
        log::debug!("Loaded lexicon '{}' from {}", config.metadata.code, path.display());
        Self::from_config(&config)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of a number word
    #[inline]
    pub fn number(&self, word: &str) -> Option<i64> {
        self.numbers.value(word)
    }

    /// The word that multiplies by a thousand
    pub fn multiplier(&self) -> &str {
        self.numbers.multiplier()
    }

    pub fn numbers(&self) -> &NumberTable {
        &self.numbers
    }

    pub fn fractions(&self) -> &FractionTable {
        &self.fractions
    }

    pub fn calendar(&self) -> &CalendarTable {
        &self.calendar
    }

    pub fn relative(&self) -> &RelativeTable {
        &self.relative
    }

    pub fn time(&self) -> &TimeTable {
        &self.time
    }

    pub fn normalization(&self) -> &NormalizationTable {
        &self.normalization
    }

    pub fn determiners(&self) -> &DeterminerTable {
        &self.determiners
    }
}
