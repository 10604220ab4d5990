// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from
//! `validate-commit.toml`.

use serde::{Deserialize, Serialize};

/// Author names that are never accepted (compared lower-cased and trimmed).
pub const FORBIDDEN_NAMES: &[&str] = &["unknown", "root", "user", "your name"];

/// Host suffix of the project's own code-hosting domain.
pub const RESERVED_DOMAIN_SUFFIX: &str = ".wireshark.org";

/// Domain reserved for documentation examples.
pub const PLACEHOLDER_DOMAIN: &str = "example.com";

/// Longest accepted subject line, after unwrapping reverts.
pub const MAX_SUBJECT_LENGTH: usize = 80;

/// Line prefixes of the retired issue-tracker trailers.
pub const FORBIDDEN_TRAILERS: &[&str] = &["Bug:", "Ping-Bug:"];

/// The main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct VcConfig {
    /// Author identity policy.
    pub identity: IdentityConfig,

    /// Commit message policy.
    pub message: MessageConfig,

    /// Message normalization settings.
    pub normalizer: NormalizerConfig,
}

impl VcConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Author identity policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IdentityConfig {
    /// Rejected author names.
    pub forbidden_names: Vec<String>,

    /// Rejected email host suffix.
    pub reserved_domain_suffix: String,

    /// Rejected email host.
    pub placeholder_domain: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            forbidden_names: FORBIDDEN_NAMES.iter().map(|s| s.to_string()).collect(),
            reserved_domain_suffix: RESERVED_DOMAIN_SUFFIX.to_string(),
            placeholder_domain: PLACEHOLDER_DOMAIN.to_string(),
        }
    }
}

/// Commit message policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MessageConfig {
    /// Maximum length of the subject line.
    pub max_subject_length: usize,

    /// Lines starting with any of these fail validation.
    pub forbidden_trailers: Vec<String>,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            max_subject_length: MAX_SUBJECT_LENGTH,
            forbidden_trailers: FORBIDDEN_TRAILERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Message normalization settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Which normalizer to run.
    pub backend: NormalizerBackend,

    /// The git executable, also used for `git show`.
    pub git: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            backend: NormalizerBackend::GitStripspace,
            git: "git".to_string(),
        }
    }
}

/// Available message normalizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizerBackend {
    /// Pipe the message through `git stripspace`
    GitStripspace,
    /// Use libgit2's message prettifier in-process
    Libgit2,
    /// Skip the whitespace check
    #[serde(rename = "none")]
    #[value(name = "none")]
    Disabled,
}

impl std::fmt::Display for NormalizerBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NormalizerBackend::GitStripspace => "git-stripspace",
            NormalizerBackend::Libgit2 => "libgit2",
            NormalizerBackend::Disabled => "none",
        };
        write!(f, "{}", name)
    }
}
