//! Date and time phrases
//!
//! Extraction runs in four steps over a single [`TokenStream`]:
//! [`clean`] normalizes the text, [`date_rules`] and [`time_rules`] fill an
//! [`ExtractionState`] while marking the tokens they understood, and
//! [`resolve`] turns the state into a timestamp. Tokens nobody claimed come
//! back as the remainder.

pub mod clean;
pub mod date_rules;
pub mod resolve;
pub mod state;
pub mod time_rules;
pub mod tokens;

pub use state::{DateFragment, ExtractionState};
pub use tokens::{Consumed, TokenStream};

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::language::Lexicon;

/// A resolved date/time and the words that were not part of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTimeMatch {
    pub datetime: NaiveDateTime,
    pub remainder: String,
}

/// Find a date/time expression in `text`
///
/// `reference` is "now"; when `None` the local clock is used. Returns `None`
/// when the text holds nothing the rules recognize.
///
/// ```
/// use chrono::NaiveDate;
/// use hablar_core::{extract_datetime, get_lexicon};
///
/// let es = get_lexicon("es").unwrap();
/// let now = NaiveDate::from_ymd_opt(2024, 3, 6)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
///
/// let found = extract_datetime(&es, "mañana a las 5 de la tarde", Some(now)).unwrap();
/// assert_eq!(found.datetime.to_string(), "2024-03-07 17:00:00");
/// assert_eq!(found.remainder, "");
///
/// assert!(extract_datetime(&es, "hola", Some(now)).is_none());
/// ```
pub fn extract_datetime(
    lexicon: &Lexicon,
    text: &str,
    reference: Option<NaiveDateTime>,
) -> Option<DateTimeMatch> {
    if text.trim().is_empty() {
        return None;
    }
    let reference = reference.unwrap_or_else(|| chrono::Local::now().naive_local());

    let mut tokens = TokenStream::new(clean::clean_tokens(lexicon.normalization(), text));
    let mut state = ExtractionState::new(reference);

    date_rules::apply(lexicon, &mut tokens, &mut state);
    time_rules::apply(lexicon, &mut tokens, &mut state);

    if !state.found() {
        log::trace!("no date or time in '{text}'");
        return None;
    }

    let datetime = resolve::resolve(&state)?;
    Some(DateTimeMatch {
        datetime,
        remainder: tokens.remainder(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::get_lexicon;
    use chrono::NaiveDate;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 6)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn extract(text: &str) -> Option<DateTimeMatch> {
        let es = get_lexicon("es").unwrap();
        extract_datetime(&es, text, Some(reference()))
    }

    #[test]
    fn test_empty_and_unrelated() {
        assert!(extract("").is_none());
        assert!(extract("   ").is_none());
        assert!(extract("hola qué tal").is_none());
    }

    #[test]
    fn test_today_is_midnight() {
        let found = extract("hoy").unwrap();
        assert_eq!(found.datetime.to_string(), "2024-03-06 00:00:00");
        assert_eq!(found.remainder, "");
    }

    #[test]
    fn test_remainder_keeps_other_words() {
        let found = extract("recuérdame llamar a mamá el viernes").unwrap();
        assert_eq!(found.datetime.to_string(), "2024-03-08 00:00:00");
        assert_eq!(found.remainder, "recuérdame llamar mamá");
    }

    #[test]
    fn test_local_clock_default() {
        let es = get_lexicon("es").unwrap();
        assert!(extract_datetime(&es, "mañana", None).is_some());
    }
}
