//! Generate config command implementation

use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new lexicon
    #[arg(long, value_name = "CODE", required = true)]
    pub code: String,

    /// Human-readable language name
    #[arg(long, value_name = "NAME", default_value = "Custom Language")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating lexicon template...");
        println!("  Language code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the word tables to suit your dialect");
        println!("2. Validate your lexicon:");
        println!("   hablar validate {}", self.output.display());
        println!("3. Use it for parsing:");
        println!(
            "   hablar --lexicon {} datetime \"mañana a las cinco\"",
            self.output.display()
        );

        Ok(())
    }

    /// Built-in Spanish tables under a new code and name
    fn generate_template(&self) -> Result<String> {
        let source = hablar_core::embedded_source("es")
            .ok_or_else(|| anyhow!("No embedded Spanish lexicon to copy"))?;

        let body = source
            .replacen("code = \"es\"", &format!("code = {:?}", self.code), 1)
            .replacen("name = \"Spanish\"", &format!("name = {:?}", self.name), 1);

        Ok(format!(
            "# Lexicon for {}, generated from the built-in Spanish tables\n\n{body}",
            self.code
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hablar_core::Lexicon;
    use tempfile::TempDir;

    #[test]
    fn test_generated_template_is_valid() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("rioplatense.toml");

        let args = GenerateConfigArgs {
            code: "es-ar".to_string(),
            name: "Rioplatense".to_string(),
            output: output.clone(),
        };
        args.execute().unwrap();

        let lexicon = Lexicon::from_file(&output).unwrap();
        assert_eq!(lexicon.code(), "es-ar");
        assert_eq!(lexicon.name(), "Rioplatense");
        assert_eq!(lexicon.number("veintisiete"), Some(27));
    }

    #[test]
    fn test_unwritable_output() {
        let args = GenerateConfigArgs {
            code: "xx".to_string(),
            name: "Test".to_string(),
            output: PathBuf::from("/nonexistent/dir/lexicon.toml"),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
