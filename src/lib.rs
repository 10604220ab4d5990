// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! validate-commit - Contribution standards check for a single commit
//!
//! Verifies the author name, the author email and the commit message of
//! one commit, typically from a `post-commit` or `pre-push` hook.
//!
//! # Features
//!
//! - **Identity Rules**: Reject placeholder names and unusable email addresses
//! - **Message Rules**: Subject length, blank line after the subject, retired
//!   issue trailers
//! - **Whitespace Check**: Compare the message with its `git stripspace` form
//!   and show an annotated diff
//! - **Git Hooks**: Install and remove the hooks that run the check
//!
//! # Example
//!
//! ```no_run
//! use validate_commit::config::VcConfig;
//! use validate_commit::rules::CommitChecker;
//!
//! let checker = CommitChecker::new(VcConfig::default());
//! let result = checker.check_reference("HEAD").unwrap();
//! result.print(true).unwrap();
//! std::process::exit(result.exit_code());
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod normalize;
pub mod rules;

// Re-exports for convenience
pub use config::VcConfig;
pub use error::{Result, VcError};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of validate-commit.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// `git describe` output at compile time (if available).
    pub const GIT_DESCRIBE: Option<&str> = option_env!("VERGEN_GIT_DESCRIBE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_DESCRIBE, GIT_SHA, GIT_COMMIT_DATE) {
            (Some(describe), _, Some(date)) => format!("{} ({} {})", VERSION, describe, date),
            (Some(describe), _, None) => format!("{} ({})", VERSION, describe),
            (None, Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (None, Some(sha), None) => format!("{} ({})", VERSION, &sha[..7.min(sha.len())]),
            _ => VERSION.to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        #[test]
        fn test_version_string_starts_with_package_version() {
            assert!(super::version_string().starts_with(super::VERSION));
        }
    }
}
