//! Number words to values
//!
//! Two engines share the lexicon: [`extract`] is a permissive left-to-right
//! scan that also understands fractions and decimals, [`grammar`] is a strict
//! recursive-descent parser used to rewrite number phrases as digits.

pub mod extract;
pub mod grammar;

pub use extract::{extract_number, extract_number_long, is_fractional};
pub use grammar::{normalize, parse_number_at};

use serde::Serialize;
use std::fmt;

/// A parsed numeric value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Decimal(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Decimal(f) => f,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Integer(i) => i == 0,
            Number::Decimal(f) => f == 0.0,
        }
    }

    /// Collapse a decimal with no fractional part to an integer
    pub fn narrowed(self) -> Number {
        match self {
            Number::Decimal(f)
                if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 =>
            {
                Number::Integer(f as i64)
            }
            other => other,
        }
    }

    pub(crate) fn add(self, other: Number) -> Number {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a
                .checked_add(b)
                .map_or(Number::Decimal(a as f64 + b as f64), Number::Integer),
            (a, b) => Number::Decimal(a.as_f64() + b.as_f64()),
        }
    }

    pub(crate) fn mul(self, other: Number) -> Number {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a
                .checked_mul(b)
                .map_or(Number::Decimal(a as f64 * b as f64), Number::Integer),
            (a, b) => Number::Decimal(a.as_f64() * b.as_f64()),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{i}"),
            Number::Decimal(d) => write!(f, "{d}"),
        }
    }
}
