//! Git history fetching for Ticketlog.
//!
//! This crate runs `git log` and hands its text to the parser:
//! - [`HistorySource`]: Anything that can produce history text
//! - [`GitHistory`]: The `git` subprocess implementation
//! - [`FetchOptions`]: Filters and layout for one fetch

mod error;
mod history;
mod options;

pub use error::{GitError, GitResult};
pub use history::{GitHistory, HistorySource, STRUCTURED_FORMAT};
pub use options::FetchOptions;
