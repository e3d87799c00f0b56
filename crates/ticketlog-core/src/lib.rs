//! Core library for Ticketlog.
//!
//! This crate wires the fetch, parse and extract stages into one run.

mod error;
mod pipeline;
mod settings;

pub use error::{CoreError, CoreResult};
pub use pipeline::{Pipeline, ScanReport};
pub use settings::{extractor_options, fetch_options, parse_options};
