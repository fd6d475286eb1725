//! Validate command implementation

use anyhow::Result;
use clap::Args;
use hablar_core::Lexicon;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the lexicon file to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.file.display());

        match Lexicon::from_file(&self.file) {
            Ok(lexicon) => {
                println!("✓ Lexicon is valid!");
                println!("  Language code: {}", lexicon.code());
                println!("  Language name: {}", lexicon.name());
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
