//! Parser error types.

use thiserror::Error;
use ticketlog_commit::Commit;

/// Parsing-related errors.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The history text could not be read (I/O failure or invalid UTF-8).
    #[error("failed to read history text after {} commit(s): {source}", .partial.len())]
    Scan {
        /// Underlying read error.
        source: std::io::Error,
        /// Commits sealed before the failure.
        partial: Vec<Commit>,
    },

    /// A structured record did not have the expected fields.
    #[error("malformed record #{index}: {reason}")]
    MalformedRecord {
        /// Zero-based position of the record in the text.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
