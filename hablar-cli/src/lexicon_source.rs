//! Lexicon source management for CLI

use anyhow::{Context, Result};
use hablar_core::{get_lexicon, Lexicon};
use std::path::PathBuf;
use std::sync::Arc;

/// Where the word tables come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    /// Lexicon compiled into the binary
    Embedded(String),
    /// External lexicon file
    External(PathBuf),
}

impl LexiconSource {
    /// Get the display name for the lexicon source
    pub fn display_name(&self) -> String {
        match self {
            LexiconSource::Embedded(code) => format!("Built-in: {code}"),
            LexiconSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Load the lexicon
    pub fn load(&self) -> Result<Arc<Lexicon>> {
        let lexicon = match self {
            LexiconSource::Embedded(code) => get_lexicon(code)?,
            LexiconSource::External(path) => Arc::new(
                Lexicon::from_file(path)
                    .with_context(|| format!("Failed to load lexicon: {}", path.display()))?,
            ),
        };
        log::info!("Using lexicon {} ({})", lexicon.code(), self.display_name());
        Ok(lexicon)
    }
}
