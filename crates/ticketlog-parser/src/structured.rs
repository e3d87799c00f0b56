//! Parser for the separator-delimited structured layout.

use std::io::BufRead;

use ticketlog_commit::{
    AUTHOR_HEADER, Commit, DATE_HEADER, FIELD_SEPARATOR, FileStatus, RECORD_SEPARATOR,
};
use tracing::{debug, warn};

use crate::{HistoryParser, ParseError, ParseResult};

/// Hash, author name, author email, date, message.
const REQUIRED_FIELDS: usize = 5;

/// Parser for records produced by the structured `--format` string.
///
/// Headers come from fixed field positions, so message lines containing a
/// colon stay in the message.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldParser;

impl FieldParser {
    /// Creates a new structured parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses the text of one record (without its leading separator).
    fn parse_record(index: usize, record: &str) -> ParseResult<Commit> {
        let fields: Vec<&str> = record.splitn(REQUIRED_FIELDS + 1, FIELD_SEPARATOR).collect();
        if fields.len() < REQUIRED_FIELDS {
            return Err(ParseError::MalformedRecord {
                index,
                reason: format!(
                    "expected at least {REQUIRED_FIELDS} fields, found {}",
                    fields.len()
                ),
            });
        }

        let id = fields[0].trim();
        if id.is_empty() {
            return Err(ParseError::MalformedRecord {
                index,
                reason: "missing commit hash".to_string(),
            });
        }

        let mut commit = Commit::new(id);

        let name = fields[1].trim();
        let email = fields[2].trim();
        let author = match (name.is_empty(), email.is_empty()) {
            (true, true) => None,
            (false, true) => Some(name.to_string()),
            (true, false) => Some(format!("<{email}>")),
            (false, false) => Some(format!("{name} <{email}>")),
        };
        if let Some(author) = author {
            commit.headers.insert(AUTHOR_HEADER.to_string(), author);
        }

        let date = fields[3].trim();
        if !date.is_empty() {
            commit.headers.insert(DATE_HEADER.to_string(), date.to_string());
        }

        for line in fields[4].trim_end().lines() {
            commit.push_message_line(line);
        }

        if let Some(files) = fields.get(REQUIRED_FIELDS) {
            for line in files.lines().filter(|l| !l.trim().is_empty()) {
                match FileStatus::parse_line(line) {
                    Some(file) => commit.files.push(file),
                    None => debug!(%line, id = %commit.short_id(), "skipping non-status line"),
                }
            }
        }

        Ok(commit)
    }
}

impl HistoryParser for FieldParser {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn parse_reader(&self, reader: &mut dyn BufRead) -> ParseResult<Vec<Commit>> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| ParseError::Scan {
                source,
                partial: Vec::new(),
            })?;

        let mut chunks = text.split(RECORD_SEPARATOR);
        if let Some(preamble) = chunks.next()
            && !preamble.trim().is_empty()
        {
            warn!(preamble = %preamble.trim(), "ignoring text before the first record");
        }

        let commits = chunks
            .enumerate()
            .map(|(index, record)| Self::parse_record(index, record))
            .collect::<ParseResult<Vec<_>>>()?;

        debug!(count = commits.len(), "parsed structured records");
        Ok(commits)
    }
}
