//! Helpers shared by the number and date/time engines

use chrono::{Duration, Months, NaiveDateTime};

/// Whether `token` parses as a finite decimal number (`"2.5"`, `"-3"`, `"7"`)
pub fn is_numeric(token: &str) -> bool {
    token.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

/// Whether `parts` is the split of an `a/b` fraction literal
///
/// Exactly two parts are required and both must be numeric.
pub fn look_for_fractions(parts: &[&str]) -> bool {
    parts.len() == 2 && parts.iter().all(|part| is_numeric(part))
}

/// Value of an `a/b` literal, or `None` when it is not one or `b` is zero
pub(crate) fn fraction_value(token: &str) -> Option<f64> {
    let parts: Vec<&str> = token.split('/').collect();
    if !look_for_fractions(&parts) {
        return None;
    }
    let numerator: f64 = parts[0].parse().ok()?;
    let denominator: f64 = parts[1].parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

/// Shift `timestamp` by a calendar-aware offset
///
/// Years and months are applied together with month-end clamping
/// (January 31 plus one month is the last day of February). Days and the
/// clock components are applied afterwards as exact durations. Returns
/// `None` when the result falls outside chrono's range.
pub fn add_calendar_offset(
    timestamp: NaiveDateTime,
    years: i64,
    months: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
) -> Option<NaiveDateTime> {
    let total_months = years.checked_mul(12)?.checked_add(months)?;
    let shifted = if total_months >= 0 {
        timestamp.checked_add_months(Months::new(u32::try_from(total_months).ok()?))?
    } else {
        timestamp.checked_sub_months(Months::new(u32::try_from(-total_months).ok()?))?
    };

    let delta = Duration::try_days(days)?
        .checked_add(&Duration::try_hours(hours)?)?
        .checked_add(&Duration::try_minutes(minutes)?)?
        .checked_add(&Duration::try_seconds(seconds)?)?;
    shifted.checked_add_signed(delta)
}

/// Leading ASCII digits of `token` as a number (`"15"` and `"15h"` give 15)
pub(crate) fn leading_number(token: &str) -> Option<u32> {
    let digits: &str = &token[..token
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(token.len(), |(i, _)| i)];
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Whether the first character of `token` is an ASCII digit
pub(crate) fn starts_with_digit(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_digit())
}
