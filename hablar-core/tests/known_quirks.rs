//! Pinned behaviors that look wrong but are relied upon
//!
//! Changing any of these is a product decision; update the test together with
//! the rule.

use chrono::{NaiveDate, NaiveDateTime};
use hablar_core::{Number, Parser};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn extract(text: &str, reference: NaiveDateTime) -> (NaiveDateTime, String) {
    let found = Parser::with_language("es")
        .unwrap()
        .extract_datetime(text, Some(reference))
        .unwrap();
    (found.datetime, found.remainder)
}

#[test]
fn test_next_month_is_seven_months() {
    let (datetime, _) = extract("el próximo mes", at(2024, 3, 6, 10, 0));
    assert_eq!(datetime, at(2024, 10, 6, 0, 0));
}

#[test]
fn test_last_year_is_seven_years() {
    let (datetime, _) = extract("el año pasado", at(2024, 3, 6, 10, 0));
    assert_eq!(datetime, at(2017, 3, 6, 0, 0));
}

#[test]
fn test_clock_offsets_count_from_midnight() {
    let (datetime, remainder) = extract("en 10 minutos", at(2024, 3, 6, 15, 0));
    assert_eq!(datetime, at(2024, 3, 6, 0, 10));
    assert_eq!(remainder, "");
}

#[test]
fn test_en_la_manana_is_tomorrow() {
    let (datetime, remainder) = extract("en la mañana", at(2024, 3, 6, 10, 0));
    assert_eq!(datetime, at(2024, 3, 7, 0, 0));
    assert_eq!(remainder, "");
}

#[test]
fn test_small_number_and_number_is_a_decimal() {
    let parser = Parser::with_language("es").unwrap();
    assert_eq!(parser.extract_number("diez y cinco"), Some(Number::Decimal(10.5)));
    assert_eq!(parser.extract_number("veinte y cinco"), Some(Number::Integer(25)));
}
