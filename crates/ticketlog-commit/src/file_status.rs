//! File status entries attached to a commit.

use serde::{Deserialize, Serialize};

/// A path changed by a commit, with its git status letter(s).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStatus {
    /// Status as printed by `--name-status` (`A`, `M`, `D`, `R100`, ...).
    pub status: String,

    /// The path of the file after the change.
    pub path: String,
}

impl FileStatus {
    /// Creates a new file status entry.
    #[must_use]
    pub fn new(status: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            path: path.into(),
        }
    }

    /// Parses one `--name-status` line (`M\tpath` or `R100\told\tnew`).
    ///
    /// For renames and copies the destination path is kept.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.split('\t');
        let status = parts.next()?.trim();
        let path = parts.next_back()?.trim();
        if status.is_empty() || path.is_empty() {
            return None;
        }
        Some(Self::new(status, path))
    }
}
