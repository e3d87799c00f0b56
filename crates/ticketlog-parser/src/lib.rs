//! History text parsers for Ticketlog.
//!
//! This crate turns `git log` output into [`Commit`] records:
//! - [`HistoryParser`]: Common interface for every layout
//! - [`BlockParser`]: Blank-line separated blocks (git's default layout)
//! - [`FieldParser`]: Separator-delimited fields (the structured layout)

mod block;
mod error;
mod options;
mod structured;

use std::io::BufRead;

use ticketlog_commit::{Commit, Layout};

pub use block::{BlockParser, COMMIT_MARKER};
pub use error::{ParseError, ParseResult};
pub use options::ParseOptions;
pub use structured::FieldParser;

/// Parses history text into commit records.
pub trait HistoryParser {
    /// Returns the parser name.
    fn name(&self) -> &'static str;

    /// Parses history text read from `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be read or does not fit the layout.
    fn parse_reader(&self, reader: &mut dyn BufRead) -> ParseResult<Vec<Commit>>;

    /// Parses history text held in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not fit the layout.
    fn parse(&self, text: &str) -> ParseResult<Vec<Commit>> {
        self.parse_reader(&mut text.as_bytes())
    }
}

/// Creates the parser matching `options.layout`.
#[must_use]
pub fn parser_for(options: ParseOptions) -> Box<dyn HistoryParser> {
    match options.layout {
        Layout::Default => Box::new(BlockParser::with_options(options)),
        Layout::Structured => Box::new(FieldParser::new()),
    }
}
