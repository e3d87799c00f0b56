//! Configuration schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use ticketlog_commit::Layout;

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// History fetch configuration.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Parser configuration.
    #[serde(default)]
    pub parser: ParserConfig,

    /// Issue extractor configuration.
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

impl Config {
    /// Checks values that TOML types alone cannot enforce.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.fetch.max_count == Some(0) {
            return Err(ConfigError::Invalid(
                "fetch.max_count must be positive".to_string(),
            ));
        }
        if let Some(ref patterns) = self.extractor.patterns {
            if patterns.is_empty() {
                return Err(ConfigError::Invalid(
                    "extractor.patterns must not be empty".to_string(),
                ));
            }
            if patterns.iter().any(|p| p.trim().is_empty()) {
                return Err(ConfigError::Invalid(
                    "extractor.patterns must not contain empty patterns".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// History fetch configuration.
///
/// Empty `since`/`author` mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Repository directory (default: current directory).
    #[serde(default)]
    pub repo: Option<PathBuf>,

    /// Time expression for `git log --since`.
    #[serde(default)]
    pub since: String,

    /// Author pattern for `git log --author`.
    #[serde(default)]
    pub author: String,

    /// Maximum number of commits to read.
    #[serde(default)]
    pub max_count: Option<usize>,

    /// Walk every ref instead of `HEAD`.
    #[serde(default)]
    pub all: bool,

    /// List changed files per commit.
    #[serde(default)]
    pub files: bool,
}

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Layout requested from git and expected by the parser.
    #[serde(default)]
    pub layout: Layout,

    /// Keep a final block that lacks a trailing blank line.
    #[serde(default = "default_true")]
    pub flush_trailing: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            flush_trailing: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Issue extractor configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Drop repeated matches.
    #[serde(default)]
    pub dedup: bool,

    /// Replacement pattern list (default: ticket-style then numeric-hash).
    #[serde(default)]
    pub patterns: Option<Vec<String>>,
}
