//! Time pass
//!
//! Runs over the tokens the date pass left. Clock readings set the absolute
//! time; "en 10 minutos" style phrases add offsets and clear it.

use crate::common::{leading_number, starts_with_digit};
use crate::datetime::state::ExtractionState;
use crate::datetime::tokens::{Consumed, TokenStream, Window};
use crate::language::tables::time::Meridiem;
use crate::language::Lexicon;

type TimeRule = fn(&Lexicon, &Window<'_>, &mut ExtractionState) -> Option<Consumed>;

const TIME_RULES: &[(&str, TimeRule)] = &[
    ("fixed_time", fixed_time),
    ("idiom", idiom),
    ("hour_fraction", hour_fraction),
    ("colon_clock", colon_clock),
    ("numeral", numeral),
];

/// Run the time rules over every unconsumed token
pub fn apply(lexicon: &Lexicon, tokens: &mut TokenStream, state: &mut ExtractionState) {
    for index in 0..tokens.len() {
        if tokens.is_consumed(index) {
            continue;
        }

        let window = tokens.window(index);
        let matched = TIME_RULES
            .iter()
            .find_map(|(name, rule)| rule(lexicon, &window, state).map(|c| (*name, c)));
        let Some((name, consumed)) = matched else {
            continue;
        };

        log::debug!(
            "time rule '{name}' consumed {} token(s) at {}",
            consumed.len,
            consumed.start
        );
        state.time_specified = true;
        tokens.consume(consumed.start, consumed.len);
        consume_prefixes(lexicon, tokens, consumed.start, state);
    }
}

/// Words before a time that belong to it: "pronto", "en punto", "a la"
fn consume_prefixes(
    lexicon: &Lexicon,
    tokens: &mut TokenStream,
    mut start: usize,
    state: &mut ExtractionState,
) {
    let time = lexicon.time();
    let mut filler_seen = false;

    for _ in 0..3 {
        let Some(prev) = start.checked_sub(1) else {
            return;
        };
        let word = tokens.get(prev);
        if !filler_seen && (time.is_early(word) || time.is_late(word)) {
            state.hour_offset += if time.is_early(word) { -1 } else { 1 };
            filler_seen = true;
        } else if !time.is_clock_prefix(word) && !time.is_indicator(word) {
            return;
        }
        tokens.consume(prev, 1);
        start = prev;
    }
}

/// Store a clock reading, converting 12-hour readings
///
/// With no meridiem, a remembered "tarde"/"noche" qualifier supplies one when
/// `use_qualifier` is set. Readings past 24:00 are rejected before any
/// conversion, without touching the state.
fn set_clock(
    lexicon: &Lexicon,
    state: &mut ExtractionState,
    hour: u32,
    minute: u32,
    meridiem: Option<Meridiem>,
    use_qualifier: bool,
) -> Option<()> {
    if hour > 24 || minute > 59 || (hour == 24 && minute > 0) {
        log::trace!("rejected clock reading {hour}:{minute:02}");
        return None;
    }
    let meridiem = meridiem.or_else(|| {
        use_qualifier
            .then_some(state.time_qualifier.as_deref())
            .flatten()
            .and_then(|q| lexicon.time().idiom_meridiem(q))
    });
    let hour = meridiem.map_or(hour, |m| m.apply(hour));
    state.absolute_time = Some((hour, minute));
    Some(())
}

/// mediodía, medio día, medianoche, media noche
fn fixed_time(lexicon: &Lexicon, w: &Window<'_>, state: &mut ExtractionState) -> Option<Consumed> {
    let (fixed, len) = lexicon.time().fixed_times().longest_match(&w.from_word())?;
    state.absolute_time = Some((fixed.hour(), 0));
    Some(Consumed::new(w.index, len))
}

/// mañana, tarde, noche, media mañana, ...; only seeds an unset clock
fn idiom(lexicon: &Lexicon, w: &Window<'_>, state: &mut ExtractionState) -> Option<Consumed> {
    let (hour, len) = lexicon.time().idioms().longest_match(&w.from_word())?;
    if state.absolute_time.is_none() {
        state.absolute_time = Some((*hour, 0));
    }
    Some(Consumed::new(w.index, len))
}

/// en media hora, en un cuarto de hora, en una hora
fn hour_fraction(lexicon: &Lexicon, w: &Window<'_>, state: &mut ExtractionState) -> Option<Consumed> {
    let time = lexicon.time();
    if !time.is_hour_word(w.word) || !(time.is_indicator(w.prev) || time.is_indicator(w.prev_prev)) {
        return None;
    }

    let index = w.index;
    let consumed = if time.is_half_word(w.prev) {
        state.minute_offset += 30;
        Consumed::new(index - 1, 2)
    } else if time.is_quarter_word(w.prev) {
        state.minute_offset += 15;
        Consumed::new(index - 1, 2)
    } else if time.is_quarter_word(w.prev_prev) {
        state.minute_offset += 15;
        Consumed::new(index - 2, 3)
    } else {
        state.hour_offset += 1;
        Consumed::new(index - 1, 2)
    };

    state.absolute_time = None;
    Some(consumed)
}

/// 5:30, 17:45, 5:30pm, 5:30 pm, 5:30 tarde, 8:00 esta noche
fn colon_clock(lexicon: &Lexicon, w: &Window<'_>, state: &mut ExtractionState) -> Option<Consumed> {
    if !starts_with_digit(w.word) {
        return None;
    }
    let (hour, rest) = w.word.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(rest.len(), |(i, _)| i);
    let minute: u32 = if minute_end == 0 {
        0
    } else {
        rest[..minute_end].parse().ok()?
    };
    let suffix = rest[minute_end..].replace('.', "");

    let time = lexicon.time();
    let mut len = 1;
    let meridiem = if !suffix.is_empty() {
        time.explicit_meridiem(&suffix)
    } else if let Some(m) = time.explicit_meridiem(w.next) {
        len += 1;
        Some(m)
    } else if let Some(m) = time.idiom_meridiem(w.next) {
        len += 1;
        Some(m)
    } else if time.is_this(w.next) && time.idiom_meridiem(w.next_next).is_some() {
        len += 2;
        time.idiom_meridiem(w.next_next)
    } else {
        None
    };

    set_clock(lexicon, state, hour, minute, meridiem, true)?;
    Some(Consumed::new(w.index, len))
}

/// Digits without a colon: 5pm, 5 tarde, cero 800, 3 horas, 10 minutos,
/// 1530, 5 en punto, 5 30
fn numeral(lexicon: &Lexicon, w: &Window<'_>, state: &mut ExtractionState) -> Option<Consumed> {
    if !starts_with_digit(w.word) || w.word.contains(':') {
        return None;
    }
    let time = lexicon.time();
    let index = w.index;

    let digits_end = w
        .word
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(w.word.len(), |(i, _)| i);
    let (digits, suffix) = w.word.split_at(digits_end);
    let number: u32 = digits.parse().ok()?;

    if !suffix.is_empty() {
        let meridiem = time.explicit_meridiem(&suffix.replace('.', ""))?;
        set_clock(lexicon, state, number, 0, Some(meridiem), false)?;
        return Some(Consumed::new(index, 1));
    }

    if let Some(meridiem) = time
        .explicit_meridiem(w.next)
        .or_else(|| time.idiom_meridiem(w.next))
    {
        set_clock(lexicon, state, number, 0, Some(meridiem), false)?;
        return Some(Consumed::new(index, 2));
    }

    // "cero ochocientos": oh-eight-hundred
    if number > 100 && time.is_military_prefix(w.prev) {
        set_clock(lexicon, state, number / 100, number % 100, None, false)?;
        let len = if time.is_hour_word(w.next) { 3 } else { 2 };
        return Some(Consumed::new(index - 1, len));
    }

    if time.is_hour_word(w.next) && !digits.starts_with('0') && number < 100 {
        state.hour_offset += i64::from(number);
        state.absolute_time = None;
        return Some(Consumed::new(index, 2));
    }
    if time.is_minute_word(w.next) {
        state.minute_offset += i64::from(number);
        state.absolute_time = None;
        return Some(Consumed::new(index, 2));
    }
    if time.is_second_word(w.next) {
        state.second_offset += i64::from(number);
        state.absolute_time = None;
        return Some(Consumed::new(index, 2));
    }

    if number > 100 {
        set_clock(lexicon, state, number / 100, number % 100, None, false)?;
        let len = if time.is_hour_word(w.next) { 2 } else { 1 };
        return Some(Consumed::new(index, len));
    }

    let on_the_hour = time.on_the_hour();
    let after = w.after_word();
    let followed_by_on_the_hour = !on_the_hour.is_empty()
        && on_the_hour.len() < after.len()
        && on_the_hour.iter().zip(after).all(|(a, b)| a == b);
    if w.next.is_empty() || followed_by_on_the_hour {
        let mut len = 1;
        let mut meridiem = None;
        if followed_by_on_the_hour {
            len += on_the_hour.len();
            meridiem = time.idiom_meridiem(after[on_the_hour.len()]);
            if meridiem.is_some() {
                len += 1;
            }
        }
        set_clock(lexicon, state, number, 0, meridiem, true)?;
        return Some(Consumed::new(index, len));
    }

    if starts_with_digit(w.next) {
        let minute = leading_number(w.next)?;
        set_clock(lexicon, state, number, minute, None, true)?;
        let len = if time.is_hour_word(w.next_next) { 3 } else { 2 };
        return Some(Consumed::new(index, len));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::clean::clean_tokens;
    use crate::language::get_lexicon;
    use chrono::{NaiveDate, NaiveTime};

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
    fn test_meridiem_words() {
        assert_eq!(run("a las 5 de la tarde").0.absolute_time, Some((17, 0)));
        assert_eq!(run("a las 5 pm").0.absolute_time, Some((17, 0)));
        assert_eq!(run("a las 5pm").0.absolute_time, Some((17, 0)));
        assert_eq!(run("a las 8 de la mañana").0.absolute_time, Some((8, 0)));
        assert_eq!(run("a las 12 am").0.absolute_time, Some((0, 0)));
        assert_eq!(run("a las 9 de la noche").0.absolute_time, Some((21, 0)));
        assert_eq!(run("a las 3 de la noche").0.absolute_time, Some((3, 0)));
    }

    #[test]
    fn test_colon_clock() {
        let (state, tokens) = run("a las 5:30 de la tarde");
        assert_eq!(state.absolute_time, Some((17, 30)));
        assert_eq!(tokens.remainder(), "");

        assert_eq!(run("17:45").0.absolute_time, Some((17, 45)));
        assert_eq!(run("5:30pm").0.absolute_time, Some((17, 30)));
        assert_eq!(run("5:30 am").0.absolute_time, Some((5, 30)));
        assert_eq!(run("25:00").0.absolute_time, None);
        assert_eq!(run("5:75").0.absolute_time, None);
    }

    #[test]
    fn test_range_checked_before_meridiem() {
        assert_eq!(run("a las 25:00 am").0.absolute_time, None);
        assert_eq!(run("a las 25 am").0.absolute_time, None);
        assert_eq!(run("a las 36am").0.absolute_time, None);
        assert_eq!(run("a las 24:30").0.absolute_time, None);
        assert_eq!(run("a las 24:00").0.absolute_time, Some((24, 0)));
    }

    #[test]
    fn test_zero_hour_at_night_stays_at_midnight() {
        assert_eq!(run("a las 00:30 de la noche").0.absolute_time, Some((0, 30)));
        assert_eq!(run("a las 3:15 de la noche").0.absolute_time, Some((3, 15)));
    }

    #[test]
    fn test_offsets() {
        let (state, tokens) = run("en 10 minutos");
        assert_eq!(state.minute_offset, 10);
        assert_eq!(state.absolute_time, None);
        assert_eq!(tokens.remainder(), "");

        assert_eq!(run("en 3 horas").0.hour_offset, 3);
        assert_eq!(run("en 30 segundos").0.second_offset, 30);
        assert_eq!(run("en media hora").0.minute_offset, 30);
        assert_eq!(run("en cuarto de hora").0.minute_offset, 15);
        assert_eq!(run("en una hora").0.hour_offset, 1);
    }

    #[test]
    fn test_idioms_seed_only_unset_clock() {
        assert_eq!(run("por la noche").0.absolute_time, Some((21, 0)));
        assert_eq!(run("media mañana").0.absolute_time, Some((10, 0)));
        assert_eq!(run("tarde noche").0.absolute_time, Some((20, 0)));
        assert_eq!(run("a las 9 pm por la noche").0.absolute_time, Some((21, 0)));
        assert_eq!(run("madrugada").0.absolute_time, Some((1, 0)));
    }

    #[test]
    fn test_noon_and_midnight() {
        assert_eq!(run("al mediodía").0.absolute_time, Some((12, 0)));
        assert_eq!(run("a medio día").0.absolute_time, Some((12, 0)));
        assert_eq!(run("a media noche").0.absolute_time, Some((0, 0)));
    }

    #[test]
    fn test_packed_and_military() {
        assert_eq!(run("1530").0.absolute_time, Some((15, 30)));
        let (state, tokens) = run("cero 800 horas");
        assert_eq!(state.absolute_time, Some((8, 0)));
        assert_eq!(tokens.remainder(), "");
    }

    #[test]
    fn test_on_the_hour_and_pairs() {
        let (state, tokens) = run("a las 5 en punto de la tarde");
        assert_eq!(state.absolute_time, Some((17, 0)));
        assert_eq!(tokens.remainder(), "");

        assert_eq!(run("a las 7 30").0.absolute_time, Some((7, 30)));
    }

    #[test]
    fn test_early_and_late_fillers() {
        let (state, tokens) = run("pronto a las 5");
        assert_eq!(state.hour_offset, -1);
        assert_eq!(state.absolute_time, Some((5, 0)));
        assert_eq!(tokens.remainder(), "");

        let (state, tokens) = run("luego 5");
        assert_eq!(state.hour_offset, 1);
        assert_eq!(state.absolute_time, Some((5, 0)));
        assert_eq!(tokens.remainder(), "");
    }

    #[test]
    fn test_unknown_suffix_is_not_a_time() {
        let (state, tokens) = run("5kg");
        assert_eq!(state.absolute_time, None);
        assert!(!state.time_specified);
        assert_eq!(tokens.remainder(), "5kg");
    }
}
