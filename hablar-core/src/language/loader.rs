//! Embedded lexicon loader
//!
//! Embedded configs are compiled once and cached; aliases share one `Arc`.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{CoreError, Result};
use crate::language::lexicon::Lexicon;

/// Embedded lexicons keyed by code and alias
static EMBEDDED: OnceLock<HashMap<String, Arc<Lexicon>>> = OnceLock::new();

/// Canonical codes of the embedded lexicons
const EMBEDDED_CODES: &[&str] = &["es"];

const SPANISH: &str = include_str!("../../configs/languages/spanish.toml");

macro_rules! embed_lexicon {
    ($map:expr, $code:expr, $alias:expr, $source:expr) => {
        match load_embedded_lexicon($code, $source) {
            Ok(lexicon) => {
                let lexicon = Arc::new(lexicon);
                $map.insert($code.to_string(), Arc::clone(&lexicon));
                $map.insert($alias.to_string(), lexicon);
            }
            Err(e) => {
                log::warn!("Failed to load embedded {} lexicon: {e}", $code);
            }
        }
    };
}

fn embedded() -> &'static HashMap<String, Arc<Lexicon>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();
        embed_lexicon!(map, "es", "spanish", SPANISH);
        map
    })
}

/// Get the embedded lexicon for a language code or alias
pub fn get_lexicon(code: &str) -> Result<Arc<Lexicon>> {
    embedded()
        .get(&code.to_lowercase())
        .cloned()
        .ok_or_else(|| CoreError::UnsupportedLanguage(code.to_string()))
}

/// Canonical codes of every embedded lexicon
pub fn list_available_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = EMBEDDED_CODES
        .iter()
        .copied()
        .filter(|code| embedded().contains_key(*code))
        .collect();
    codes.sort_unstable();
    codes
}

/// Raw TOML of an embedded lexicon, a starting point for custom ones
pub fn embedded_source(code: &str) -> Option<&'static str> {
    match code.to_lowercase().as_str() {
        "es" | "spanish" => Some(SPANISH),
        _ => None,
    }
}

fn load_embedded_lexicon(code: &str, source: &str) -> Result<Lexicon> {
    let lexicon = Lexicon::from_toml_str(source)
        .map_err(|e| CoreError::Configuration(format!("Failed to parse {code} lexicon: {e}")))?;

    if lexicon.code() != code {
        return Err(CoreError::Configuration(format!(
            "Language code mismatch: expected {code}, found {}",
            lexicon.code()
        )));
    }

    Ok(lexicon)
}
