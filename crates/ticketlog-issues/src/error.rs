//! Extraction error types.

use thiserror::Error;

/// Extraction-related errors.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A configured pattern is not a valid regular expression.
    #[error("invalid issue pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Regex compilation error.
        source: regex::Error,
    },
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
