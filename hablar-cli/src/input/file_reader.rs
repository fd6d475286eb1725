//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads batch input files
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = match fs::read_to_string(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            other => other.with_context(|| format!("Failed to read file: {}", path.display()))?,
        };

        Ok(content)
    }

    /// Non-blank lines of a file, trimmed
    pub fn read_lines(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
