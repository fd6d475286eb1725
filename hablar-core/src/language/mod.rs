//! Per-locale word tables
//!
//! Lexicons are data-driven: a TOML config is validated and compiled into a
//! [`Lexicon`] of hash lookups shared by every engine.

pub mod config;
pub mod lexicon;
pub mod loader;
pub mod tables;

pub use config::LexiconConfig;
pub use lexicon::Lexicon;
pub use loader::{embedded_source, get_lexicon, list_available_languages};
