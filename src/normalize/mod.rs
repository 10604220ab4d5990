// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message normalization.
//!
//! The whitespace check compares a message with its canonical form as
//! produced by a [`Normalizer`]. Normalization must be idempotent.

use crate::config::{NormalizerBackend, NormalizerConfig};
use crate::error::{Result, VcError};
use crate::git::GitCommand;

/// Produces the canonical form of a commit message.
pub trait Normalizer {
    /// Normalize `message`.
    ///
    /// An error means the normalizer is unavailable; callers skip the
    /// whitespace check instead of failing.
    fn normalize(&self, message: &str) -> Result<String>;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> Result<String>,
{
    fn normalize(&self, message: &str) -> Result<String> {
        self(message)
    }
}

/// Runs `git stripspace`.
#[derive(Debug, Clone)]
pub struct GitStripspace {
    git: String,
}

impl GitStripspace {
    /// Use the given git executable.
    pub fn new(git: impl Into<String>) -> Self {
        Self { git: git.into() }
    }
}

impl Default for GitStripspace {
    fn default() -> Self {
        Self::new("git")
    }
}

impl Normalizer for GitStripspace {
    fn normalize(&self, message: &str) -> Result<String> {
        GitCommand::new(&self.git)
            .args(["stripspace"])
            .output(Some(message))
    }
}

/// libgit2's equivalent of `git stripspace`, without a subprocess.
#[derive(Debug, Clone, Copy, Default)]
pub struct Libgit2Prettify;

impl Normalizer for Libgit2Prettify {
    fn normalize(&self, message: &str) -> Result<String> {
        git2::message_prettify(message, None).map_err(|e| VcError::WithContext {
            context: "libgit2".to_string(),
            message: e.message().to_string(),
        })
    }
}

/// The normalizer selected by `backend = "none"`; always unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disabled;

impl Normalizer for Disabled {
    fn normalize(&self, _message: &str) -> Result<String> {
        Err(VcError::WithContext {
            context: "normalizer".to_string(),
            message: "disabled by configuration".to_string(),
        })
    }
}

/// Build the normalizer named by the configuration.
pub fn from_config(config: &NormalizerConfig) -> Box<dyn Normalizer> {
    tracing::debug!("Using normalizer: {}", config.backend);
    match config.backend {
        NormalizerBackend::GitStripspace => Box::new(GitStripspace::new(&config.git)),
        NormalizerBackend::Libgit2 => Box::new(Libgit2Prettify),
        NormalizerBackend::Disabled => Box::new(Disabled),
    }
}
