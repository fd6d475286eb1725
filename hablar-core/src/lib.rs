//! Spanish number, date/time and gender parsing
//!
//! This crate turns spoken-style Spanish into values: number words become
//! integers and decimals, phrases such as "el próximo viernes a las 5 de la
//! tarde" become timestamps, and nouns get a best-effort grammatical gender.
//!
//! # Architecture
//!
//! - **Lexicon layer** ([`language`]): word tables loaded from TOML and
//!   compiled into lookups, embedded in the binary or read from disk
//! - **Engines** ([`number`], [`datetime`], [`gender`]): pure functions over a
//!   `&Lexicon`
//! - **Facade** ([`Parser`]): a lexicon bundled with every engine
//!
//! # Example
//!
//! ```rust
//! use hablar_core::{Number, Parser};
//!
//! let parser = Parser::with_language("es").unwrap();
//!
//! assert_eq!(
//!     parser.extract_number("dos mil trescientos cuarenta y cinco"),
//!     Some(Number::Integer(2345))
//! );
//! assert_eq!(parser.normalize("quiero tres cafés", false), "quiero 3 cafés");
//! ```

pub mod common;
pub mod datetime;
pub mod error;
pub mod gender;
pub mod language;
pub mod number;
pub mod parser;

pub use datetime::{extract_datetime, DateTimeMatch};
pub use error::{CoreError, Result};
pub use gender::{infer_gender, Gender};
pub use language::{
    embedded_source, get_lexicon, list_available_languages, Lexicon, LexiconConfig,
};
pub use number::{
    extract_number, extract_number_long, is_fractional, normalize, parse_number_at, Number,
};
pub use parser::Parser;
