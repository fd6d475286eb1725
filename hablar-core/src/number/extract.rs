//! Permissive number extraction
//!
//! Scans whitespace tokens left to right, summing number words, digit
//! literals and fractions, and follows "y" and decimal-marker continuations
//! into the rest of the phrase.

use crate::common;
use crate::language::Lexicon;
use crate::number::Number;

/// Extract the numeric value of a phrase
///
/// Returns `None` when no token contributes a value. Whole decimals are
/// narrowed to integers.
///
/// ```
/// use hablar_core::{get_lexicon, number::{extract_number, Number}};
///
/// let es = get_lexicon("es").unwrap();
/// assert_eq!(extract_number(&es, "dos y medio"), Some(Number::Decimal(2.5)));
/// assert_eq!(extract_number(&es, "veintisiete"), Some(Number::Integer(27)));
/// assert_eq!(extract_number(&es, "hola"), None);
/// ```
pub fn extract_number(lexicon: &Lexicon, text: &str) -> Option<Number> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    scan(lexicon, &words).map(Number::narrowed)
}

/// Value of a fused compound such as "cientocinco" (105)
///
/// The longest number word that is a proper suffix is stripped and the
/// remaining prefix is resolved against the lexicon, itself decomposed when
/// it is not a whole word.
pub fn extract_number_long(lexicon: &Lexicon, word: &str) -> Option<i64> {
    decompose(lexicon, &word.to_lowercase())
}

/// `1/divisor` for a fraction word ("tercio", "cuartos", "vigésima")
pub fn is_fractional(lexicon: &Lexicon, word: &str) -> Option<f64> {
    let word = word.to_lowercase();
    let stem = word.strip_suffix('s').unwrap_or(&word);
    lexicon
        .fractions()
        .divisor(stem)
        .map(|divisor| 1.0 / f64::from(divisor))
}

fn decompose(lexicon: &Lexicon, word: &str) -> Option<i64> {
    let numbers = lexicon.numbers();
    for (suffix, value) in numbers.longest_first() {
        if suffix.len() >= word.len() {
            continue;
        }
        let Some(prefix) = word.strip_suffix(suffix) else {
            continue;
        };
        let head = numbers
            .value(prefix)
            .or_else(|| decompose(lexicon, prefix));
        if let Some(head) = head {
            log::trace!("decomposed '{word}' as '{prefix}' + '{suffix}'");
            return head.checked_add(value);
        }
    }
    None
}

fn integer_literal(word: &str) -> Option<Number> {
    if !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()) {
        word.parse::<i64>().ok().map(Number::Integer)
    } else {
        None
    }
}

fn scan(lexicon: &Lexicon, words: &[&str]) -> Option<Number> {
    let numbers = lexicon.numbers();
    let mut result: Option<Number> = None;
    let mut count = 0;

    while count < words.len() {
        let word = words[count];
        let next_word = words.get(count + 1).copied();

        let mut value: Option<Number> = None;
        if let Some(v) = numbers.value(word) {
            if numbers.is_multiplier(word) {
                let base = result.unwrap_or(Number::Integer(1));
                result = Some(base.mul(Number::Integer(v)));
            } else {
                value = Some(Number::Integer(v));
            }
        } else if let Some(v) = integer_literal(word) {
            value = Some(v);
        } else if common::is_numeric(word) {
            value = word.parse::<f64>().ok().map(Number::Decimal);
        } else if let Some(fraction) = is_fractional(lexicon, word) {
            // "un tercio", "tres cuartos"; a bare fraction counts one
            let base = result
                .filter(|r| !r.is_zero())
                .unwrap_or(Number::Integer(1));
            result = Some(base.mul(Number::Decimal(fraction)));
            count += 1;
            continue;
        }

        if value.is_none() {
            value = common::fraction_value(word).map(Number::Decimal);
        }
        if value.is_none() {
            value = extract_number_long(lexicon, word).map(Number::Integer);
        }

        if let Some(v) = value {
            result = Some(result.map_or(v, |r| r.add(v)));
        }

        let Some(next_word) = next_word else {
            break;
        };

        if numbers.is_and(next_word) {
            let Some(current) = result else {
                count += 1;
                continue;
            };
            let rest = &words[count + 2..];
            if let Some(after) = scan(lexicon, rest).filter(|n| !n.is_zero()) {
                result = Some(join_and(lexicon, current, after, rest));
                break;
            }
        }

        if numbers.is_decimal_marker(next_word) {
            if let Some(current) = result {
                let decimal = join_decimal(lexicon, current, &words[count + 2..]);
                result = Some(decimal.unwrap_or(current));
                break;
            }
        }

        count += 1;
    }

    result
}

/// "dos y medio" (2.5), "cuarenta y uno" (41), "diez y cinco" (10.5)
fn join_and(lexicon: &Lexicon, current: Number, after: Number, rest: &[&str]) -> Number {
    if current.as_f64() < after.as_f64() || current.as_f64() < 20.0 {
        let mut shifted = after.as_f64();
        while shifted > 1.0 {
            shifted /= 10.0;
        }
        for _ in 0..leading_zero_fillers(lexicon, rest) {
            shifted /= 10.0;
        }
        Number::Decimal(current.as_f64() + shifted)
    } else {
        current.add(after)
    }
}

/// "dos punto cero cinco" (2.05)
fn join_decimal(lexicon: &Lexicon, current: Number, rest: &[&str]) -> Option<Number> {
    let Number::Integer(whole) = current else {
        return None;
    };
    let Some(Number::Integer(fraction)) = scan(lexicon, rest).map(Number::narrowed) else {
        return None;
    };
    if fraction < 0 {
        return None;
    }
    let zeros = "0".repeat(leading_zero_fillers(lexicon, rest));
    format!("{whole}.{zeros}{fraction}")
        .parse::<f64>()
        .ok()
        .map(Number::Decimal)
}

fn leading_zero_fillers(lexicon: &Lexicon, words: &[&str]) -> usize {
    words
        .iter()
        .take_while(|w| lexicon.numbers().is_zero_filler(w))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::get_lexicon;

    fn es() -> std::sync::Arc<Lexicon> {
        get_lexicon("es").unwrap()
    }

    #[test]
    fn test_single_words() {
        let es = es();
        assert_eq!(extract_number(&es, "veintisiete"), Some(Number::Integer(27)));
        assert_eq!(extract_number(&es, "cero"), Some(Number::Integer(0)));
        assert_eq!(extract_number(&es, "0"), Some(Number::Integer(0)));
        assert_eq!(extract_number(&es, "hola"), None);
        assert_eq!(extract_number(&es, ""), None);
    }

    #[test]
    fn test_multiplier() {
        let es = es();
        assert_eq!(extract_number(&es, "mil"), Some(Number::Integer(1000)));
        assert_eq!(extract_number(&es, "dos mil"), Some(Number::Integer(2000)));
        assert_eq!(
            extract_number(&es, "dos mil trescientos cuarenta y cinco"),
            Some(Number::Integer(2345))
        );
    }

    #[test]
    fn test_fractions() {
        let es = es();
        assert_eq!(extract_number(&es, "un tercio de taza"), Some(Number::Decimal(1.0 / 3.0)));
        assert_eq!(extract_number(&es, "tres cuartos"), Some(Number::Decimal(0.75)));
        assert_eq!(extract_number(&es, "medio"), Some(Number::Decimal(0.5)));
        assert_eq!(extract_number(&es, "3/4"), Some(Number::Decimal(0.75)));
        assert_eq!(extract_number(&es, "1/0"), None);
    }

    #[test]
    fn test_and_continuation() {
        let es = es();
        assert_eq!(extract_number(&es, "dos y medio"), Some(Number::Decimal(2.5)));
        assert_eq!(extract_number(&es, "dos y tres cuartos taza"), Some(Number::Decimal(2.75)));
        assert_eq!(extract_number(&es, "cuarenta y uno"), Some(Number::Integer(41)));
        assert_eq!(extract_number(&es, "diez y cinco"), Some(Number::Decimal(10.5)));
        assert_eq!(extract_number(&es, "uno y uno"), Some(Number::Integer(2)));
        assert_eq!(
            extract_number(&es, "trescientos cuarenta y cinco"),
            Some(Number::Integer(345))
        );
    }

    #[test]
    fn test_leading_and_is_skipped() {
        let es = es();
        assert_eq!(extract_number(&es, "y cinco"), Some(Number::Integer(5)));
    }

    #[test]
    fn test_decimal_markers() {
        let es = es();
        assert_eq!(extract_number(&es, "dos punto cinco"), Some(Number::Decimal(2.5)));
        assert_eq!(extract_number(&es, "tres coma quince"), Some(Number::Decimal(3.15)));
        assert_eq!(extract_number(&es, "dos punto cero cinco"), Some(Number::Decimal(2.05)));
        assert_eq!(extract_number(&es, "dos punto"), Some(Number::Integer(2)));
        assert_eq!(extract_number(&es, "2.5"), Some(Number::Decimal(2.5)));
    }

    #[test]
    fn test_compound_words() {
        let es = es();
        assert_eq!(extract_number_long(&es, "cientocinco"), Some(105));
        assert_eq!(extract_number_long(&es, "doscientoscinco"), Some(205));
        assert_eq!(extract_number_long(&es, "milcientocinco"), Some(1105));
        assert_eq!(extract_number_long(&es, "ninguno"), None);
        assert_eq!(extract_number(&es, "cientocinco"), Some(Number::Integer(105)));
    }

    #[test]
    fn test_is_fractional() {
        let es = es();
        assert_eq!(is_fractional(&es, "tercio"), Some(1.0 / 3.0));
        assert_eq!(is_fractional(&es, "cuartos"), Some(0.25));
        assert_eq!(is_fractional(&es, "vigésimo"), Some(1.0 / 20.0));
        assert_eq!(is_fractional(&es, "trigésima"), Some(1.0 / 30.0));
        assert_eq!(is_fractional(&es, "centésimo"), Some(0.01));
        assert_eq!(is_fractional(&es, "milésima"), Some(0.001));
        assert_eq!(is_fractional(&es, "mesa"), None);
    }
}
