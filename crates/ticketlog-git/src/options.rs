//! Fetch options.

use ticketlog_commit::Layout;

/// Filters and output layout for one `git log` run.
///
/// Empty `since`/`author` values leave the corresponding flag off, so git
/// applies no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Time expression passed to `--since` (e.g. `yesterday`, `2024-01-01`).
    pub since: String,

    /// Author pattern passed to `--author`.
    pub author: String,

    /// Layout requested from git.
    pub layout: Layout,

    /// Upper bound on the number of commits (`--max-count`).
    pub max_count: Option<usize>,

    /// Walk every ref instead of just `HEAD` (`--all`).
    pub all_refs: bool,

    /// List changed files (`--name-status`). Only honoured by the structured layout.
    pub include_files: bool,
}

impl FetchOptions {
    /// Creates options with the given filters and defaults otherwise.
    #[must_use]
    pub fn new(since: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            since: since.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    /// Sets the layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the commit limit.
    #[must_use]
    pub fn with_max_count(mut self, max_count: Option<usize>) -> Self {
        self.max_count = max_count;
        self
    }

    /// Walks all refs.
    #[must_use]
    pub fn with_all_refs(mut self, all_refs: bool) -> Self {
        self.all_refs = all_refs;
        self
    }

    /// Lists changed files.
    #[must_use]
    pub fn with_files(mut self, include_files: bool) -> Self {
        self.include_files = include_files;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_filters() {
        let options = FetchOptions::default();
        assert!(options.since.is_empty());
        assert!(options.author.is_empty());
        assert_eq!(options.layout, Layout::Structured);
        assert!(options.max_count.is_none());
        assert!(!options.all_refs);
        assert!(!options.include_files);
    }

    #[test]
    fn test_builder() {
        let options = FetchOptions::new("yesterday", "Jane")
            .with_layout(Layout::Default)
            .with_max_count(Some(10))
            .with_all_refs(true)
            .with_files(true);

        assert_eq!(options.since, "yesterday");
        assert_eq!(options.author, "Jane");
        assert_eq!(options.layout, Layout::Default);
        assert_eq!(options.max_count, Some(10));
        assert!(options.all_refs);
        assert!(options.include_files);
    }
}
