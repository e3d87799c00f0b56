//! Commit record as read from the history text.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::FileStatus;

/// Header carrying the author identity.
pub const AUTHOR_HEADER: &str = "Author";

/// Header carrying the author date.
pub const DATE_HEADER: &str = "Date";

/// Layout of git's default `Date:` header (`Mon Jan 2 15:04:05 2006 -0700`).
const GIT_DEFAULT_DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y %z";

/// Length of an abbreviated commit id.
pub const SHORT_ID_LEN: usize = 7;

/// Abbreviates a commit id to [`SHORT_ID_LEN`] characters.
#[must_use]
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// A commit as read from the history text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit identifier (hash).
    pub id: String,

    /// Header lines keyed by name (e.g. `Author`, `Date`).
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// The commit message, one `\n`-terminated entry per line.
    #[serde(default)]
    pub message: String,

    /// Files touched by the commit, in listing order.
    #[serde(default)]
    pub files: Vec<FileStatus>,
}

impl Commit {
    /// Creates an empty commit with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets a header, replacing any previous value.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Appends a message line.
    #[must_use]
    pub fn with_message_line(mut self, line: &str) -> Self {
        self.push_message_line(line);
        self
    }

    /// Appends a file status entry.
    #[must_use]
    pub fn with_file(mut self, file: FileStatus) -> Self {
        self.files.push(file);
        self
    }

    /// Appends `line` and a trailing newline to the message.
    pub fn push_message_line(&mut self, line: &str) {
        self.message.push_str(line);
        self.message.push('\n');
    }

    /// Returns the value of the given header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Returns the `Author` header.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.header(AUTHOR_HEADER)
    }

    /// Parses the `Date` header.
    ///
    /// Accepts RFC 3339 (as emitted by `%aI`) and git's default date layout.
    #[must_use]
    pub fn date(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.header(DATE_HEADER)?.trim();
        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_str(raw, GIT_DEFAULT_DATE_FORMAT))
            .ok()
    }

    /// Returns the first line of the message.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Returns the short id (first 7 characters).
    #[must_use]
    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }

    /// Returns true if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.headers.is_empty()
            && self.message.is_empty()
            && self.files.is_empty()
    }
}
