//! Integration tests for number word extraction

use hablar_core::{get_lexicon, Number, Parser};

fn parser() -> Parser {
    Parser::with_language("es").unwrap()
}

#[test]
fn test_cardinals_zero_to_ninety_nine() {
    let parser = parser();

    let cases = [
        ("cero", 0),
        ("uno", 1),
        ("nueve", 9),
        ("once", 11),
        ("dieciséis", 16),
        ("diecinueve", 19),
        ("veinte", 20),
        ("veintidós", 22),
        ("veintisiete", 27),
        ("treinta", 30),
        ("cuarenta y uno", 41),
        ("cincuenta y cinco", 55),
        ("noventa y nueve", 99),
    ];

    for (phrase, expected) in cases {
        assert_eq!(
            parser.extract_number(phrase),
            Some(Number::Integer(expected)),
            "extracting from '{phrase}'"
        );
    }
}

#[test]
fn test_hundreds_and_thousands() {
    let parser = parser();
    assert_eq!(parser.extract_number("cien"), Some(Number::Integer(100)));
    assert_eq!(parser.extract_number("quinientas"), Some(Number::Integer(500)));
    assert_eq!(parser.extract_number("tres mil"), Some(Number::Integer(3000)));
    assert_eq!(
        parser.extract_number("dos mil trescientos cuarenta y cinco"),
        Some(Number::Integer(2345))
    );
}

#[test]
fn test_case_insensitive() {
    let parser = parser();
    assert_eq!(parser.extract_number("Veinte"), Some(Number::Integer(20)));
    assert_eq!(parser.extract_number("DOS Y MEDIO"), Some(Number::Decimal(2.5)));
}

#[test]
fn test_number_inside_sentence() {
    let parser = parser();
    assert_eq!(
        parser.extract_number("necesito cinco manzanas"),
        Some(Number::Integer(5))
    );
    assert_eq!(
        parser.extract_number("añade 12 huevos"),
        Some(Number::Integer(12))
    );
    assert_eq!(parser.extract_number("nada por aquí"), None);
}

#[test]
fn test_fraction_words() {
    let parser = parser();
    assert_eq!(parser.is_fractional("tercio"), Some(1.0 / 3.0));
    assert_eq!(parser.is_fractional("onceavo"), Some(1.0 / 11.0));
    assert_eq!(parser.is_fractional("casa"), None);
    assert_eq!(
        parser.extract_number("dos y medio"),
        Some(Number::Decimal(2.5))
    );
    assert_eq!(
        parser.extract_number("media taza de azúcar"),
        Some(Number::Decimal(0.5))
    );
}

#[test]
fn test_zero_is_a_result() {
    let parser = parser();
    let zero = parser.extract_number("cero grados");
    assert_eq!(zero, Some(Number::Integer(0)));
    assert!(zero.unwrap().is_zero());
}

#[test]
fn test_free_functions_match_parser() {
    let es = get_lexicon("spanish").unwrap();
    let parser = parser();
    for phrase in ["ocho", "tres cuartos", "doscientos", "2.5", "1/4"] {
        assert_eq!(
            hablar_core::extract_number(&es, phrase),
            parser.extract_number(phrase)
        );
    }
}

#[test]
fn test_results_serialize_untagged() {
    let parser = parser();
    let integer = parser.extract_number("siete").unwrap();
    let decimal = parser.extract_number("siete y medio").unwrap();
    assert_eq!(serde_json::to_string(&integer).unwrap(), "7");
    assert_eq!(serde_json::to_string(&decimal).unwrap(), "7.5");
}
