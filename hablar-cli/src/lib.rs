//! Hablar CLI library
//!
//! This library provides the command-line interface for the hablar Spanish
//! number, date/time and gender parsers.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod lexicon_source;
pub mod output;
pub mod progress;

pub use commands::Cli;
pub use error::{CliError, CliResult};
