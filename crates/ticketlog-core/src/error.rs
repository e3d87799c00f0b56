//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Fetching the history failed.
    #[error("fetch failed: {0}")]
    Git(#[from] ticketlog_git::GitError),

    /// The history text could not be parsed.
    #[error("parse failed: {0}")]
    Parse(#[from] ticketlog_parser::ParseError),

    /// The extractor could not be built.
    #[error("extractor error: {0}")]
    Extract(#[from] ticketlog_issues::ExtractError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] ticketlog_config::ConfigError),
}

impl CoreError {
    /// Returns true if the error stems from user input rather than the history itself.
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::Git(ticketlog_git::GitError::InvalidRepoPath(_))
                | Self::Extract(_)
                | Self::Config(_)
        )
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
