// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Author name and email rules.

use crate::config::IdentityConfig;
use std::fmt;

use super::validator::ValidationIssue;

/// Instructions for fixing the configured git identity.
pub const GIT_USER_INSTRUCTIONS: &str = "\
To configure your name and email for git, run:

  git config --global user.name \"Your Name\"
  git config --global user.email \"you@example.com\"

After that update the author of your latest commit with:

  git commit --amend --reset-author --no-edit
";

/// Outcome of checking an author name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameVerdict {
    /// Looks like a real display name.
    Accepted,
    /// Accepted, but has no space and may be a login name.
    NoSpace,
    /// A placeholder or system account name.
    Forbidden,
}

impl NameVerdict {
    /// Whether the name passes validation.
    pub fn is_accepted(self) -> bool {
        self != NameVerdict::Forbidden
    }
}

/// Why an email address was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailRejection {
    /// Not exactly one `@`.
    Malformed,
    /// Top-level label mentions "local".
    LocalDomain,
    /// Numeric top-level label, likely an IP address.
    NumericTld,
    /// The project's own code-hosting domain.
    ReservedDomain,
    /// The documentation placeholder domain.
    PlaceholderDomain,
    /// Hostname was never configured, e.g. `user@box.(none)`.
    UnsetHostname,
}

impl fmt::Display for EmailRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            EmailRejection::Malformed => "not a valid address",
            EmailRejection::LocalDomain => "local host domain",
            EmailRejection::NumericTld => "host looks like an IP address",
            EmailRejection::ReservedDomain => "project hosting domain",
            EmailRejection::PlaceholderDomain => "documentation domain",
            EmailRejection::UnsetHostname => "unconfigured host name",
        };
        f.write_str(reason)
    }
}

/// Check an author name against the built-in policy.
pub fn verify_name(name: &str) -> bool {
    check_name(name, &IdentityConfig::default()).is_accepted()
}

/// Check an author email against the built-in policy.
pub fn verify_email(email: &str) -> bool {
    check_email(email, &IdentityConfig::default()).is_none()
}

/// Classify an author name. Comparison is case-insensitive and ignores
/// surrounding whitespace.
pub fn check_name(name: &str, policy: &IdentityConfig) -> NameVerdict {
    let name = name.trim().to_lowercase();
    if policy
        .forbidden_names
        .iter()
        .any(|forbidden| forbidden.trim().to_lowercase() == name)
    {
        return NameVerdict::Forbidden;
    }
    if !name.contains(' ') {
        return NameVerdict::NoSpace;
    }
    NameVerdict::Accepted
}

/// Return the first reason `email` is unacceptable, if any.
pub fn check_email(email: &str, policy: &IdentityConfig) -> Option<EmailRejection> {
    let email = email.trim().to_lowercase();

    let mut parts = email.split('@');
    let (Some(_user), Some(host), None) = (parts.next(), parts.next(), parts.next()) else {
        return Some(EmailRejection::Malformed);
    };

    let tld = host.rsplit('.').next().unwrap_or(host);

    if tld.contains("local") {
        return Some(EmailRejection::LocalDomain);
    }
    if !tld.is_empty() && tld.chars().all(|c| c.is_ascii_digit()) {
        return Some(EmailRejection::NumericTld);
    }
    let reserved = policy.reserved_domain_suffix.to_lowercase();
    if !reserved.is_empty() && host.ends_with(&reserved) {
        return Some(EmailRejection::ReservedDomain);
    }
    if host == policy.placeholder_domain.to_lowercase() {
        return Some(EmailRejection::PlaceholderDomain);
    }
    if host.contains("(none)") {
        return Some(EmailRejection::UnsetHostname);
    }

    None
}

/// Issues for the author name: an error when forbidden, a warning when it
/// looks like a login name.
pub fn check_author_name(name: &str, policy: &IdentityConfig) -> Option<ValidationIssue> {
    match check_name(name, policy) {
        NameVerdict::Accepted => None,
        NameVerdict::NoSpace => Some(ValidationIssue::warning(
            "author-name-no-space",
            format!(
                "name '{}' does not contain a space",
                name.trim().to_lowercase()
            ),
        )),
        NameVerdict::Forbidden => Some(ValidationIssue::error(
            "author-name-forbidden",
            format!("Disallowed author name: {}", name),
        )),
    }
}

/// Issue for a rejected author email.
pub fn check_author_email(email: &str, policy: &IdentityConfig) -> Option<ValidationIssue> {
    check_email(email, policy).map(|reason| {
        ValidationIssue::error(
            "author-email-forbidden",
            format!("Disallowed author email address: {} ({})", email, reason),
        )
    })
}
