//! Git error types.

use std::path::PathBuf;

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository path does not exist or is not a directory.
    #[error("repository path is not a directory: {0}")]
    InvalidRepoPath(PathBuf),

    /// The git executable could not be found.
    #[error("git is not installed or not in PATH")]
    GitNotFound,

    /// `git log` exited unsuccessfully.
    #[error("git log failed (exit code {exit_code}): {stderr}")]
    CommandFailed {
        /// Process exit code, or -1 when killed by a signal.
        exit_code: i32,
        /// Captured standard error.
        stderr: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_repo_path_display() {
        let err = GitError::InvalidRepoPath(PathBuf::from("/tmp/missing"));
        assert_eq!(
            err.to_string(),
            "repository path is not a directory: /tmp/missing"
        );
    }

    #[test]
    fn test_git_not_found_display() {
        assert_eq!(
            GitError::GitNotFound.to_string(),
            "git is not installed or not in PATH"
        );
    }

    #[test]
    fn test_command_failed_display() {
        let err = GitError::CommandFailed {
            exit_code: 128,
            stderr: "fatal: not a git repository".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "git log failed (exit code 128): fatal: not a git repository"
        );
    }

    #[test]
    fn test_error_is_debug() {
        let debug = format!("{:?}", GitError::GitNotFound);
        assert!(debug.contains("GitNotFound"));
    }
}
