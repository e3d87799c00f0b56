//! Locating and reading `ticketlog.toml`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "ticketlog.toml";

/// Returns the nearest `ticketlog.toml` in `start_dir` or one of its ancestors.
pub fn find_config_file(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
    start_dir
        .as_ref()
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Reads, parses and validates the configuration at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if `path` does not exist, or an error if
/// the file cannot be read, parsed or validated.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&content).map_err(|source| ConfigError::InvalidToml {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;

    Ok(config)
}

/// Loads the nearest configuration file above `start_dir`, or the defaults
/// when there is none.
///
/// # Errors
///
/// Returns an error if a configuration file exists but is invalid.
pub fn find_config_or_default(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    let start_dir = start_dir.as_ref();
    match find_config_file(start_dir) {
        Some(path) => load_config(path),
        None => {
            debug!(?start_dir, "no configuration file, using defaults");
            Ok(Config::default())
        }
    }
}
