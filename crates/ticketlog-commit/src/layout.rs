//! History text layouts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separates one commit from the next in the structured layout.
pub const RECORD_SEPARATOR: char = '\x1e';

/// Separates fields of one commit in the structured layout.
pub const FIELD_SEPARATOR: char = '\x1f';

/// Shape of the history text handed from the fetcher to the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Git's default multi-line layout, split into blocks on blank lines.
    Default,
    /// Separator-delimited fields: hash, author name, email, date, message.
    #[default]
    Structured,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Structured => write!(f, "structured"),
        }
    }
}
