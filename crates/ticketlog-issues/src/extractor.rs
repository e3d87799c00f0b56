//! Regex-based issue reference extractor.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ticketlog_commit::Commit;
use tracing::debug;

use crate::{ExtractError, ExtractResult};

/// Ticket-style references: a non-whitespace run, a hyphen, digits (`JIRA-1`).
pub const TICKET_PATTERN: &str = r"(\S+)-\d+";

/// Numeric-hash references (`#42`).
pub const HASH_PATTERN: &str = r"#\d+";

static DEFAULT_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [TICKET_PATTERN, HASH_PATTERN]
        .iter()
        .map(|p| Regex::new(p).expect("invalid regex"))
        .collect()
});

/// Returns the built-in patterns, in evaluation order.
#[must_use]
pub fn default_patterns() -> Vec<String> {
    vec![TICKET_PATTERN.to_string(), HASH_PATTERN.to_string()]
}

/// Configuration for the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorOptions {
    /// Keep only the first occurrence of each match.
    #[serde(default)]
    pub dedup: bool,

    /// Patterns applied to each message, in order.
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            dedup: false,
            patterns: default_patterns(),
        }
    }
}

/// One match found in a commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRef {
    /// Id of the commit whose message matched.
    pub commit_id: String,

    /// Index of the pattern that produced the match.
    pub pattern: usize,

    /// The matched text.
    pub text: String,
}

impl IssueRef {
    /// Returns the abbreviated id of the matching commit.
    #[must_use]
    pub fn short_id(&self) -> &str {
        ticketlog_commit::short_id(&self.commit_id)
    }
}

/// Finds issue references in commit messages.
#[derive(Debug, Clone)]
pub struct IssueExtractor {
    regexes: Vec<Regex>,
    dedup: bool,
}

impl IssueExtractor {
    /// Creates an extractor with the built-in patterns and no de-duplication.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regexes: DEFAULT_REGEXES.clone(),
            dedup: false,
        }
    }

    /// Creates an extractor from options.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern fails to compile.
    pub fn with_options(options: &ExtractorOptions) -> ExtractResult<Self> {
        let regexes = options
            .patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ExtractError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<ExtractResult<Vec<_>>>()?;

        Ok(Self {
            regexes,
            dedup: options.dedup,
        })
    }

    /// Returns the active patterns.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.regexes.iter().map(Regex::as_str)
    }

    /// Returns whether repeated matches are dropped.
    #[must_use]
    pub fn dedup(&self) -> bool {
        self.dedup
    }

    /// Collects every match across `commits`.
    ///
    /// For each commit, all matches of the first pattern come before the
    /// matches of the next one.
    #[must_use]
    pub fn extract(&self, commits: &[Commit]) -> Vec<String> {
        self.extract_refs(commits)
            .into_iter()
            .map(|issue| issue.text)
            .collect()
    }

    /// Like [`extract`](Self::extract), keeping the commit and pattern of each match.
    #[must_use]
    pub fn extract_refs(&self, commits: &[Commit]) -> Vec<IssueRef> {
        let mut seen = HashSet::new();
        let mut refs = Vec::new();

        for commit in commits {
            for (pattern, regex) in self.regexes.iter().enumerate() {
                for m in regex.find_iter(&commit.message) {
                    if self.dedup && !seen.insert(m.as_str().to_string()) {
                        continue;
                    }
                    refs.push(IssueRef {
                        commit_id: commit.id.clone(),
                        pattern,
                        text: m.as_str().to_string(),
                    });
                }
            }
        }

        debug!(count = refs.len(), commits = commits.len(), "extracted issue references");
        refs
    }
}

impl Default for IssueExtractor {
    fn default() -> Self {
        Self::new()
    }
}
