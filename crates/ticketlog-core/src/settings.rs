//! Conversion from configuration to per-stage options.

use ticketlog_config::Config;
use ticketlog_git::FetchOptions;
use ticketlog_issues::ExtractorOptions;
use ticketlog_parser::ParseOptions;

/// Builds the fetch options for a run.
#[must_use]
pub fn fetch_options(config: &Config) -> FetchOptions {
    FetchOptions::new(&config.fetch.since, &config.fetch.author)
        .with_layout(config.parser.layout)
        .with_max_count(config.fetch.max_count)
        .with_all_refs(config.fetch.all)
        .with_files(config.fetch.files)
}

/// Builds the parser options for a run.
#[must_use]
pub fn parse_options(config: &Config) -> ParseOptions {
    ParseOptions::new(config.parser.layout).with_flush_trailing(config.parser.flush_trailing)
}

/// Builds the extractor options for a run.
#[must_use]
pub fn extractor_options(config: &Config) -> ExtractorOptions {
    let mut options = ExtractorOptions {
        dedup: config.extractor.dedup,
        ..ExtractorOptions::default()
    };
    if let Some(ref patterns) = config.extractor.patterns {
        options.patterns.clone_from(patterns);
    }
    options
}
