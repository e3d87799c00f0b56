//! Blank-line block parser for git's default `log` layout.
//!
//! Each input line is classified in priority order:
//!
//! 1. empty line: seal the current record and start a new one
//! 2. `commit <id>`: set the record id
//! 3. a line containing `:`: header, split on the first colon
//! 4. anything else: message line
//!
//! Rule 3 is a heuristic. A message line such as `see: http://x` is stored
//! as a header. Use the structured layout when that matters.

use std::io::BufRead;

use ticketlog_commit::Commit;
use tracing::debug;

use crate::{HistoryParser, ParseError, ParseOptions, ParseResult};

/// Prefix of the line that introduces a commit.
pub const COMMIT_MARKER: &str = "commit ";

/// Parser for blank-line separated commit blocks.
#[derive(Debug, Clone, Copy)]
pub struct BlockParser {
    flush_trailing: bool,
}

impl BlockParser {
    /// Creates a parser that keeps an unterminated final record.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Creates a parser with the given options.
    #[must_use]
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            flush_trailing: options.flush_trailing,
        }
    }

    /// Applies one line to the record in progress.
    fn feed(line: &str, current: &mut Commit, commits: &mut Vec<Commit>) {
        if line.is_empty() {
            seal(current, commits);
        } else if let Some(id) = line.strip_prefix(COMMIT_MARKER) {
            current.id = id.trim().to_string();
        } else if let Some((key, value)) = line.split_once(':') {
            current
                .headers
                .insert(key.trim().to_string(), value.trim().to_string());
        } else {
            current.push_message_line(line);
        }
    }
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Moves the record in progress to the output if it has an id.
fn seal(current: &mut Commit, commits: &mut Vec<Commit>) {
    let record = std::mem::take(current);
    if !record.id.is_empty() {
        commits.push(record);
    } else if !record.is_empty() {
        debug!(
            headers = record.headers.len(),
            message = %record.subject(),
            "discarding block without commit marker"
        );
    }
}

impl HistoryParser for BlockParser {
    fn name(&self) -> &'static str {
        "block"
    }

    fn parse_reader(&self, reader: &mut dyn BufRead) -> ParseResult<Vec<Commit>> {
        let mut commits = Vec::new();
        let mut current = Commit::default();

        for line in reader.lines() {
            match line {
                Ok(line) => Self::feed(&line, &mut current, &mut commits),
                Err(source) => {
                    return Err(ParseError::Scan {
                        source,
                        partial: commits,
                    });
                }
            }
        }

        if self.flush_trailing {
            seal(&mut current, &mut commits);
        } else if !current.is_empty() {
            debug!(id = %current.id, "dropping record without trailing blank line");
        }

        debug!(count = commits.len(), "parsed commit blocks");
        Ok(commits)
    }
}
