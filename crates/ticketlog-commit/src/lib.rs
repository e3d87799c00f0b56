//! Commit types for Ticketlog.
//!
//! This crate provides the record types shared by every stage:
//! - [`Commit`]: One commit as read from the history text
//! - [`FileStatus`]: A changed path attached to a commit
//! - [`Layout`]: The shape of the history text the parser expects

mod commit;
mod file_status;
mod layout;

pub use commit::{AUTHOR_HEADER, Commit, DATE_HEADER, SHORT_ID_LEN, short_id};
pub use file_status::FileStatus;
pub use layout::{FIELD_SEPARATOR, Layout, RECORD_SEPARATOR};
