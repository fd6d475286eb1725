//! Date pass
//!
//! Each token is offered to the rules in order; the first rule that matches
//! wins. A rule only touches the state when it returns `Some`.

use crate::common::{leading_number, starts_with_digit};
use crate::datetime::state::{DateFragment, ExtractionState};
use crate::datetime::tokens::{Consumed, TokenStream, Window};
use crate::language::Lexicon;

type DateRule = fn(&Lexicon, &Window<'_>, &mut ExtractionState) -> Option<Consumed>;

const DATE_RULES: &[(&str, DateRule)] = &[
    ("time_qualifier", time_qualifier),
    ("relative_day", relative_day),
    ("day_count", day_count),
    ("week", week),
    ("month_count", month_count),
    ("year_count", year_count),
    ("weekday", weekday),
    ("month_name", month_name),
    ("from_anchor", from_anchor),
];

/// Run the date rules over every unconsumed token
pub fn apply(lexicon: &Lexicon, tokens: &mut TokenStream, state: &mut ExtractionState) {
    for index in 0..tokens.len() {
        if tokens.is_consumed(index) {
            continue;
        }

        let window = tokens.window(index);
        let matched = DATE_RULES
            .iter()
            .find_map(|(name, rule)| rule(lexicon, &window, state).map(|c| (*name, c)));
        let Some((name, consumed)) = matched else {
            continue;
        };
        if consumed.is_empty() {
            log::trace!("date rule '{name}' noted '{}'", window.word);
            continue;
        }

        log::debug!(
            "date rule '{name}' consumed {} token(s) at {}",
            consumed.len,
            consumed.start
        );
        state.date_specified = true;
        tokens.consume(consumed.start, consumed.len);
        consume_markers(lexicon, tokens, consumed.start);
    }
}

/// Up to two marker words right before a consumed span go with it
fn consume_markers(lexicon: &Lexicon, tokens: &mut TokenStream, mut start: usize) {
    for _ in 0..2 {
        let Some(prev) = start.checked_sub(1) else {
            return;
        };
        if !is_marker(lexicon, tokens.get(prev)) {
            return;
        }
        tokens.consume(prev, 1);
        start = prev;
    }
}

fn is_marker(lexicon: &Lexicon, word: &str) -> bool {
    let relative = lexicon.relative();
    relative.is_forward(word)
        || relative.is_backward(word)
        || relative.is_from(word)
        || lexicon.time().is_indicator(word)
}

fn is_numeral(lexicon: &Lexicon, word: &str) -> bool {
    starts_with_digit(word) || lexicon.number(word).is_some()
}

fn time_qualifier(lexicon: &Lexicon, w: &Window<'_>, state: &mut ExtractionState) -> Option<Consumed> {
    if !lexicon.time().is_qualifier(w.word) {
        return None;
    }
    state.time_qualifier = Some(w.word.to_string());
    Some(Consumed::nothing(w.index))
}

/// hoy, mañana, ayer, anteayer, pasado mañana, ...
fn relative_day(lexicon: &Lexicon, w: &Window<'_>, state: &mut ExtractionState) -> Option<Consumed> {
    if state.from_anchor {
        return None;
    }
    let (day, len) = lexicon.relative().days().longest_match(&w.from_word())?;
    if day.anchor_only {
        return None;
    }
    // "las 8 mañana" is a morning, not tomorrow
    if day.ambiguous && (is_numeral(lexicon, w.prev) || state.relative_day_seen) {
        return None;
    }

    state.day_offset += day.offset;
    state.relative_day_seen = true;
    Some(Consumed::new(w.index, len))
}

/// N día, día N, N día pasado
fn day_count(lexicon: &Lexicon, w: &Window<'_>, state: &mut ExtractionState) -> Option<Consumed> {
    let calendar = lexicon.calendar();
    if !calendar.is_day_word(w.word) {
        return None;
    }

    if starts_with_digit(w.prev) && !calendar.is_month(w.next) {
        let days = leading_number(w.prev)?;
        state.day_offset += i64::from(days);
        let len = if lexicon.relative().is_day_suffix(w.next) { 3 } else { 2 };
        return Some(Consumed::new(w.index - 1, len));
    }

    if starts_with_digit(w.next) && !calendar.is_month(w.next_next) {
        let days = leading_number(w.next)?;
        state.day_offset += i64::from(days);
        return Some(Consumed::new(w.index, 2));
    }

    None
}

/// Direction given by a next/previous word before or after `w.word`
fn relative_shift(lexicon: &Lexicon, w: &Window<'_>) -> Option<(i64, Consumed)> {
    let relative = lexicon.relative();
    if relative.is_next_before(w.prev) {
        Some((1, Consumed::new(w.index - 1, 2)))
    } else if relative.is_last_before(w.prev) {
        Some((-1, Consumed::new(w.index - 1, 2)))
    } else if relative.is_next_after(w.next) {
        Some((1, Consumed::new(w.index, 2)))
    } else if relative.is_last_after(w.next) {
        Some((-1, Consumed::new(w.index, 2)))
    } else {
        None
    }
}

/// N semana, próxima semana, semana pasada
fn week(lexicon: &Lexicon, w: &Window<'_>, state: &mut ExtractionState) -> Option<Consumed> {
    if state.from_anchor || !lexicon.calendar().is_week_word(w.word) {
        return None;
    }

    if starts_with_digit(w.prev) {
        let weeks = leading_number(w.prev)?;
        state.day_offset += i64::from(weeks) * 7;
        return Some(Consumed::new(w.index - 1, 2));
    }

    let (direction, consumed) = relative_shift(lexicon, w)?;
    state.day_offset = direction * 7;
    Some(consumed)
}

/// N mes, próximo mes, mes pasado
fn month_count(lexicon: &Lexicon, w: &Window<'_>, state: &mut ExtractionState) -> Option<Consumed> {
    if state.from_anchor || !lexicon.calendar().is_month_word(w.word) {
        return None;
    }

    if starts_with_digit(w.prev) {
        state.month_offset = i64::from(leading_number(w.prev)?);
        return Some(Consumed::new(w.index - 1, 2));
    }

    // Seven months, not one
    let (direction, consumed) = relative_shift(lexicon, w)?;
    state.month_offset = direction * 7;
    Some(consumed)
}

/// N año, próximo año, año pasado
fn year_count(lexicon: &Lexicon, w: &Window<'_>, state: &mut ExtractionState) -> Option<Consumed> {
    if state.from_anchor || !lexicon.calendar().is_year_word(w.word) {
        return None;
    }

    if starts_with_digit(w.prev) {
        state.year_offset = i64::from(leading_number(w.prev)?);
        return Some(Consumed::new(w.index - 1, 2));
    }

    // Seven years, as for months
    let (direction, consumed) = relative_shift(lexicon, w)?;
    state.year_offset = direction * 7;
    Some(consumed)
}

/// lunes, siguiente lunes, pasado lunes
fn weekday(lexicon: &Lexicon, w: &Window<'_>, state: &mut ExtractionState) -> Option<Consumed> {
    if state.from_anchor {
        return None;
    }
    let day = lexicon.calendar().weekday_index(w.word)?;
    let relative = lexicon.relative();

    let mut offset = state.days_until(day);
    let mut start = w.index;
    let mut len = 1;
    if relative.is_weekday_next(w.prev) {
        offset += 7;
        start -= 1;
        len += 1;
    } else if relative.is_weekday_last(w.prev) {
        offset -= 7;
        start -= 1;
        len += 1;
    }
    if relative.is_weekday_next(w.next) || relative.is_weekday_last(w.next) {
        len += 1;
    }

    state.day_offset = offset;
    Some(Consumed::new(start, len))
}

/// 15 mayo, mayo 15, 15 día mayo, mayo día 15; each with an optional year
fn month_name(lexicon: &Lexicon, w: &Window<'_>, state: &mut ExtractionState) -> Option<Consumed> {
    let calendar = lexicon.calendar();
    let month = calendar.month_index(w.word)? as u32 + 1;
    let index = w.index;

    let (start, len, day, year) = if starts_with_digit(w.prev) {
        (index - 1, 2, w.prev, w.next)
    } else if starts_with_digit(w.next) {
        (index, 2, w.next, w.next_next)
    } else if starts_with_digit(w.prev_prev) && calendar.is_day_word(w.prev) {
        (index - 2, 3, w.prev_prev, w.next)
    } else if calendar.is_day_word(w.next) && starts_with_digit(w.next_next) {
        (index, 3, w.next_next, w.next_next_next)
    } else {
        // A bare month names no day
        return Some(Consumed::new(index, 1));
    };

    let Some(day) = leading_number(day) else {
        return Some(Consumed::new(index, 1));
    };
    let year = if starts_with_digit(year) {
        leading_number(year).and_then(|y| i32::try_from(y).ok())
    } else {
        None
    };

    state.date_fragment = Some(DateFragment { month, day, year });
    Some(Consumed::new(start, len + usize::from(year.is_some())))
}

/// desde mañana, a partir del lunes, en julio, ...
fn from_anchor(lexicon: &Lexicon, w: &Window<'_>, state: &mut ExtractionState) -> Option<Consumed> {
    let relative = lexicon.relative();
    let calendar = lexicon.calendar();
    if !relative.is_from(w.word) {
        return None;
    }

    // The month itself is left for the month rule
    if calendar.is_month(w.next) {
        state.from_anchor = true;
        return Some(Consumed::new(w.index, 1));
    }

    if let Some(day) = calendar.weekday_index(w.next) {
        let (shift, extra) = weekday_modifier(lexicon, w.next_next);
        state.day_offset += state.days_until(day) + shift;
        state.from_anchor = true;
        return Some(Consumed::new(w.index, 2 + extra));
    }

    let modified = relative.is_forward(w.next) || relative.is_backward(w.next);
    if let Some(day) = calendar.weekday_index(w.next_next).filter(|_| modified) {
        let (shift, _) = weekday_modifier(lexicon, w.next);
        state.day_offset += state.days_until(day) + shift;
        state.from_anchor = true;
        return Some(Consumed::new(w.index, 3));
    }

    if let Some((day, len)) = relative.days().longest_match(&w.after_word()) {
        state.day_offset += day.offset;
        state.from_anchor = true;
        return Some(Consumed::new(w.index, 1 + len));
    }

    None
}

/// (+7, 1) after "después", (-7, 1) after "antes", else (0, 0)
fn weekday_modifier(lexicon: &Lexicon, word: &str) -> (i64, usize) {
    let relative = lexicon.relative();
    if relative.is_forward(word) {
        (7, 1)
    } else if relative.is_backward(word) {
        (-7, 1)
    } else {
        (0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::clean::clean_tokens;
    use crate::language::get_lexicon;
    use chrono::{NaiveDate, NaiveTime};

    /// 2024-03-06 is a Wednesday
    fn run(text: &str) -> (ExtractionState, TokenStream) {
        let es = get_lexicon("es").unwrap();
        let reference = NaiveDate::from_ymd_opt(2024, 3, 6)
            .unwrap()
            .and_time(NaiveTime::MIN);
        let mut tokens = TokenStream::new(clean_tokens(es.normalization(), text));
        let mut state = ExtractionState::new(reference);
        apply(&es, &mut tokens, &mut state);
        (state, tokens)
    }

    #[test]
    fn test_tomorrow_and_qualifier() {
        let (state, tokens) = run("mañana a las 5 de la tarde");
        assert_eq!(state.day_offset, 1);
        assert_eq!(state.time_qualifier.as_deref(), Some("tarde"));
        assert_eq!(tokens.remainder(), "la 5 tarde");
    }

    #[test]
    fn test_morning_after_numeral_is_not_tomorrow() {
        let (state, tokens) = run("a las 8 de la mañana");
        assert_eq!(state.day_offset, 0);
        assert!(!state.date_specified);
        assert_eq!(tokens.remainder(), "la 8 mañana");
    }

    #[test]
    fn test_relative_days() {
        assert_eq!(run("pasado mañana").0.day_offset, 2);
        assert_eq!(run("ayer").0.day_offset, -1);
        assert_eq!(run("anteayer").0.day_offset, -2);
        assert_eq!(run("ante ayer").0.day_offset, -2);
        assert_eq!(run("ante ante ayer").0.day_offset, -3);
        assert_eq!(run("hoy").0.day_offset, 0);
        assert!(run("hoy").0.date_specified);
    }

    #[test]
    fn test_day_counts() {
        let (state, tokens) = run("dentro de 3 días");
        assert_eq!(state.day_offset, 3);
        assert_eq!(tokens.remainder(), "dentro");

        assert_eq!(run("día 4").0.day_offset, 4);
    }

    #[test]
    fn test_weeks() {
        assert_eq!(run("en 2 semanas").0.day_offset, 14);
        assert_eq!(run("la semana siguiente").0.day_offset, 7);
        assert_eq!(run("la semana pasada").0.day_offset, -7);
        assert_eq!(run("la última semana").0.day_offset, -7);
    }

    #[test]
    fn test_weekdays() {
        assert_eq!(run("el lunes").0.day_offset, 5);
        assert_eq!(run("el viernes").0.day_offset, 2);
        assert_eq!(run("el siguiente viernes").0.day_offset, 9);
        assert_eq!(run("el pasado lunes").0.day_offset, -2);
    }

    #[test]
    fn test_month_names() {
        let (state, tokens) = run("el 15 de mayo");
        assert_eq!(
            state.date_fragment,
            Some(DateFragment {
                month: 5,
                day: 15,
                year: None
            })
        );
        assert_eq!(tokens.remainder(), "");

        let (state, _) = run("mayo 15 2025");
        assert_eq!(
            state.date_fragment,
            Some(DateFragment {
                month: 5,
                day: 15,
                year: Some(2025)
            })
        );

        let (state, _) = run("13 día dic");
        assert_eq!(state.date_fragment.map(|f| (f.month, f.day)), Some((12, 13)));

        let (state, tokens) = run("en julio");
        assert_eq!(state.date_fragment, None);
        assert!(state.date_specified);
        assert_eq!(tokens.remainder(), "");
    }

    #[test]
    fn test_from_anchor() {
        let (state, tokens) = run("desde mañana");
        assert_eq!(state.day_offset, 1);
        assert!(state.from_anchor);
        assert_eq!(tokens.remainder(), "");

        let (state, _) = run("desde el viernes");
        assert_eq!(state.day_offset, 2);

        let (state, _) = run("a partir del lunes después");
        assert_eq!(state.day_offset, 12);
    }

    #[test]
    fn test_from_anchor_blocks_relative_days() {
        let (state, tokens) = run("desde ayer hoy");
        assert_eq!(state.day_offset, -1);
        assert_eq!(tokens.remainder(), "hoy");
    }
}
