//! Fraction word table

use std::collections::HashMap;

use crate::language::config::FractionConfig;

/// Maps fraction words ("tercio", "vigésima", ...) to their divisor
#[derive(Debug, Clone, Default)]
pub struct FractionTable {
    divisors: HashMap<String, u32>,
}

impl FractionTable {
    pub fn from_config(config: &FractionConfig) -> Self {
        let mut divisors = HashMap::new();

        // Fixed entries first so group entries win on a clash
        for fixed in &config.fixed {
            for word in &fixed.words {
                divisors.insert(word.to_lowercase(), fixed.divisor);
            }
        }
        for (position, group) in (0u32..).zip(&config.tens_groups) {
            for word in group {
                divisors.insert(word.to_lowercase(), (position + 2) * 10);
            }
        }
        for (position, group) in (0u32..).zip(&config.groups) {
            for word in group {
                divisors.insert(word.to_lowercase(), position + 2);
            }
        }

        Self { divisors }
    }

    #[inline]
    pub fn divisor(&self, word: &str) -> Option<u32> {
        self.divisors.get(word).copied()
    }
}
