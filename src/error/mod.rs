// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for validate-commit.
//!
//! Only failures that abort a run are errors. Rejected names, emails and
//! message bodies are reported as [`crate::rules::ValidationIssue`]s instead.

use std::path::PathBuf;
use thiserror::Error;

/// Exit status reserved for an interrupted run.
pub const EXIT_INTERRUPTED: i32 = 130;

/// The main error type for validate-commit operations.
#[derive(Error, Debug)]
pub enum VcError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Interrupted")]
    Interrupted,

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl VcError {
    /// Process exit status for this error.
    ///
    /// A failed `git` invocation surfaces the tool's own exit code so that
    /// callers (hooks, scripts) see what git reported.
    pub fn exit_code(&self) -> i32 {
        match self {
            VcError::Git(GitError::CommandFailed { code, .. }) => {
                code.unwrap_or(EXIT_INTERRUPTED)
            }
            VcError::Interrupted => EXIT_INTERRUPTED,
            _ => 1,
        }
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Failed to run {command}: {message}")]
    SpawnFailed { command: String, message: String },

    /// `code` is `None` when the process was killed by a signal.
    #[error("Command '{command}' returned non-zero exit status {}: {message}", code.map_or_else(|| "(signal)".to_string(), |c| c.to_string()))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        message: String,
    },

    #[error("Unexpected output from {command}: expected {expected} fields, got {found}")]
    MalformedOutput {
        command: String,
        expected: usize,
        found: usize,
    },

    #[error("Failed to render diff: {message}")]
    DiffFailed { message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook} (use --force to replace it)")]
    AlreadyExists { hook: String },

    #[error("Unknown hook: {hook}")]
    NotFound { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },

    #[error("Failed to render hook '{hook}': {message}")]
    RenderFailed { hook: String, message: String },
}

/// Result type alias for validate-commit operations.
pub type Result<T> = std::result::Result<T, VcError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| VcError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config"),
        };
        assert!(err.to_string().contains("/path/to/config"));
    }

    #[test]
    fn test_command_failed_keeps_tool_exit_code() {
        let err: VcError = GitError::CommandFailed {
            command: "git show".to_string(),
            code: Some(128),
            message: "fatal: bad revision 'nope'".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 128);
        assert!(err.to_string().contains("128"));
        assert!(err.to_string().contains("bad revision"));
    }

    #[test]
    fn test_signal_killed_command_maps_to_interrupt_status() {
        let err: VcError = GitError::CommandFailed {
            command: "git show".to_string(),
            code: None,
            message: String::new(),
        }
        .into();
        assert_eq!(err.exit_code(), EXIT_INTERRUPTED);
        assert!(err.to_string().contains("(signal)"));
    }

    #[test]
    fn test_other_errors_exit_with_one() {
        let err: VcError = ConfigError::ParseError {
            message: "bad toml".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(VcError::Interrupted.exit_code(), 130);
    }

    #[test]
    fn test_result_ext_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let err = res.context("hooks").unwrap_err();
        assert_eq!(err.to_string(), "hooks: no such file");
    }
}
