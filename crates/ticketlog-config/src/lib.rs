//! Configuration management for Ticketlog.
//!
//! This crate handles loading and validating the `ticketlog.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_config_file, find_config_or_default, load_config};
pub use schema::{Config, ExtractorConfig, FetchConfig, ParserConfig};
