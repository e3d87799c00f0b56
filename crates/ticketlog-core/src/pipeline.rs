//! Fetch, parse and extract in one run.

use ticketlog_commit::Commit;
use ticketlog_config::Config;
use ticketlog_git::{FetchOptions, HistorySource};
use ticketlog_issues::{IssueExtractor, IssueRef};
use ticketlog_parser::{HistoryParser, parser_for};
use tracing::info;

use crate::{CoreResult, extractor_options, parse_options};

/// Everything one run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// History text as returned by the source.
    pub raw: String,

    /// Parsed commits, in history order.
    pub commits: Vec<Commit>,

    /// Issue references, in extraction order.
    pub issues: Vec<IssueRef>,
}

impl ScanReport {
    /// Returns the matched texts only.
    #[must_use]
    pub fn issue_texts(&self) -> Vec<&str> {
        self.issues.iter().map(|issue| issue.text.as_str()).collect()
    }
}

/// Orchestrates the fetch, parse and extract stages.
pub struct Pipeline {
    source: Box<dyn HistorySource>,
    parser: Box<dyn HistoryParser>,
    extractor: IssueExtractor,
}

impl Pipeline {
    /// Creates a pipeline from its stages.
    #[must_use]
    pub fn new(
        source: Box<dyn HistorySource>,
        parser: Box<dyn HistoryParser>,
        extractor: IssueExtractor,
    ) -> Self {
        Self {
            source,
            parser,
            extractor,
        }
    }

    /// Creates a pipeline whose parser and extractor follow `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if an extractor pattern is invalid.
    pub fn from_config(source: Box<dyn HistorySource>, config: &Config) -> CoreResult<Self> {
        let parser = parser_for(parse_options(config));
        let extractor = IssueExtractor::with_options(&extractor_options(config))?;
        Ok(Self::new(source, parser, extractor))
    }

    /// Returns the parser in use.
    pub fn parser(&self) -> &dyn HistoryParser {
        self.parser.as_ref()
    }

    /// Returns the extractor in use.
    pub fn extractor(&self) -> &IssueExtractor {
        &self.extractor
    }

    /// Fetches the history text.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails.
    pub fn fetch(&self, options: &FetchOptions) -> CoreResult<String> {
        Ok(self.source.fetch(options)?)
    }

    /// Parses history text with the configured parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not fit the parser's layout.
    pub fn parse(&self, text: &str) -> CoreResult<Vec<Commit>> {
        Ok(self.parser.parse(text)?)
    }

    /// Runs all stages. A fetch failure stops the run before parsing.
    ///
    /// # Errors
    ///
    /// Returns an error if fetching or parsing fails.
    pub fn run(&self, options: &FetchOptions) -> CoreResult<ScanReport> {
        let raw = self.fetch(options)?;
        let commits = self.parse(&raw)?;
        info!(count = commits.len(), parser = self.parser.name(), "parsed commits");

        let issues = self.extractor.extract_refs(&commits);
        info!(count = issues.len(), "found issue references");

        Ok(ScanReport {
            raw,
            commits,
            issues,
        })
    }
}
