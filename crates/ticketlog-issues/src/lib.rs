//! Issue reference extraction for Ticketlog.
//!
//! Scans commit messages for tracker references such as `JIRA-123` and `#42`.

mod error;
mod extractor;

pub use error::{ExtractError, ExtractResult};
pub use extractor::{
    ExtractorOptions, HASH_PATTERN, IssueExtractor, IssueRef, TICKET_PATTERN, default_patterns,
};
