//! History fetching through the `git` executable.

use std::path::{Path, PathBuf};
use std::process::Command;

use ticketlog_commit::Layout;
use tracing::{debug, warn};

use crate::{FetchOptions, GitError, GitResult};

/// `--format` specifier for [`Layout::Structured`].
///
/// Each commit is introduced by a record separator (`\x1e`) and carries
/// hash, author name, author email, author date (ISO 8601) and the raw
/// message, each followed by a unit separator (`\x1f`). `--name-status`
/// lines, when requested, follow the last separator.
pub const STRUCTURED_FORMAT: &str = "%x1e%H%x1f%an%x1f%ae%x1f%aI%x1f%B%x1f";

const DEFAULT_PROGRAM: &str = "git";

/// Produces history text for the parser.
pub trait HistorySource {
    /// Fetches the history matching `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be obtained. An empty history
    /// is `Ok` with empty text.
    fn fetch(&self, options: &FetchOptions) -> GitResult<String>;
}

/// Runs `git log` in a repository directory.
#[derive(Debug, Clone)]
pub struct GitHistory {
    program: PathBuf,
    repo_path: Option<PathBuf>,
}

impl GitHistory {
    /// Creates a fetcher for the current directory.
    #[must_use]
    pub fn current_dir() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            repo_path: None,
        }
    }

    /// Creates a fetcher that runs git inside `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::InvalidRepoPath`] if `path` is not a directory.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(GitError::InvalidRepoPath(path.to_path_buf()));
        }
        Ok(Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            repo_path: Some(path.to_path_buf()),
        })
    }

    /// Overrides the git executable.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Returns the repository directory, if one was given.
    #[must_use]
    pub fn repo_path(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }

    /// Builds the `git log` argument list for `options`.
    #[must_use]
    pub fn log_args(options: &FetchOptions) -> Vec<String> {
        let mut args = vec!["log".to_string(), "--no-color".to_string()];

        if !options.since.is_empty() {
            args.push(format!("--since={}", options.since));
        }
        if !options.author.is_empty() {
            args.push(format!("--author={}", options.author));
        }
        if let Some(max_count) = options.max_count {
            args.push(format!("--max-count={max_count}"));
        }
        if options.all_refs {
            args.push("--all".to_string());
        }

        if options.layout == Layout::Structured {
            args.push(format!("--format={STRUCTURED_FORMAT}"));
            if options.include_files {
                args.push("--name-status".to_string());
            }
        }

        args
    }
}

impl Default for GitHistory {
    fn default() -> Self {
        Self::current_dir()
    }
}

impl HistorySource for GitHistory {
    fn fetch(&self, options: &FetchOptions) -> GitResult<String> {
        let args = Self::log_args(options);
        let mut cmd = Command::new(&self.program);
        cmd.args(&args);
        if let Some(ref path) = self.repo_path {
            cmd.current_dir(path);
        }

        debug!(program = ?self.program, ?args, cwd = ?self.repo_path, "running git log");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::Io(e)
            }
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let exit_code = output.status.code().unwrap_or(-1);
            warn!(exit_code, stderr = %stderr.trim(), "git log failed");
            return Err(GitError::CommandFailed { exit_code, stderr });
        }

        // Combined output: stdout first, then anything git reported on stderr.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if !stderr.is_empty() {
            warn!(stderr = %stderr.trim(), "git log reported warnings");
            text.push_str(&stderr);
        }

        debug!(bytes = text.len(), "fetched history");
        Ok(text)
    }
}
