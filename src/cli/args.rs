// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use crate::config::NormalizerBackend;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Validate a commit's author and message against the contribution standards.
///
/// Checks the author name, the author email and the commit message of one
/// commit. Exits with 0 when all checks pass and 1 otherwise.
#[derive(Parser, Debug)]
#[command(name = "validate-commit")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Validate a commit against contribution standards", long_about = None)]
pub struct Cli {
    /// Additional commands
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Commit to check
    #[arg(default_value = "HEAD")]
    pub commit: String,

    /// Only print output when a check fails (for use in git hooks)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "VALIDATE_COMMIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Message normalizer to use instead of the configured one
    #[arg(long, global = true, value_enum)]
    pub normalizer: Option<NormalizerBackend>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage git hooks
    Hooks(HooksArgs),

    /// Write a configuration file with the default policy
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install git hooks
    Install {
        /// Specific hook to install (post-commit or pre-push)
        #[arg(value_name = "HOOK")]
        hook: Option<String>,

        /// Replace existing hooks, keeping a backup
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall git hooks
    Uninstall {
        /// Specific hook to uninstall
        #[arg(value_name = "HOOK")]
        hook: Option<String>,
    },

    /// Show hook status
    Status,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}
