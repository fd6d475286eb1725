//! Error types for the hablar core

use thiserror::Error;

/// Errors raised while loading or compiling a lexicon
///
/// Parsing never fails with an error: a phrase that holds no number or date
/// yields `None` from the extraction functions.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The lexicon file could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No embedded lexicon exists for the requested code
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The lexicon parsed but its tables are inconsistent
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// I/O error while reading an external lexicon
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::UnsupportedLanguage("xx".to_string());
        assert_eq!(err.to_string(), "Unsupported language: xx");

        let err = CoreError::Configuration("missing [metadata]".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing [metadata]");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
