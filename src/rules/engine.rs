// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Runs every rule against one commit.

use crate::config::VcConfig;
use crate::error::Result;
use crate::git::{self, CommitInfo};
use crate::normalize::{self, Normalizer};

use super::body::verify_body;
use super::identity::{check_author_email, check_author_name, GIT_USER_INSTRUCTIONS};
use super::validator::ValidationResult;

/// Validates commits against the configured policy.
pub struct CommitChecker {
    config: VcConfig,
    normalizer: Box<dyn Normalizer>,
}

impl CommitChecker {
    /// Create a checker using the normalizer named by the configuration.
    pub fn new(config: VcConfig) -> Self {
        let normalizer = normalize::from_config(&config.normalizer);
        Self { config, normalizer }
    }

    /// Create a checker with an explicit normalizer.
    pub fn with_normalizer(config: VcConfig, normalizer: Box<dyn Normalizer>) -> Self {
        Self { config, normalizer }
    }

    /// Fetch `reference` with git and validate it.
    pub fn check_reference(&self, reference: &str) -> Result<ValidationResult> {
        let info = git::fetch_commit(&self.config.normalizer.git, reference)?;
        Ok(self.check(&info))
    }

    /// Validate already fetched commit metadata.
    ///
    /// Identity issues come first, followed by the git identity
    /// instructions when the name or email was rejected, then the message
    /// findings.
    pub fn check(&self, info: &CommitInfo) -> ValidationResult {
        let mut result = ValidationResult {
            commit_id: Some(info.abbrev_id.clone()),
            subject: Some(info.subject().to_string()),
            ..ValidationResult::default()
        };
        let identity = &self.config.identity;

        let name_issue = check_author_name(&info.author_name, identity);
        let name_ok = name_issue.as_ref().map_or(true, |issue| !issue.is_error);
        if let Some(issue) = name_issue {
            result.push_issue(issue);
            if name_ok {
                result.push_guidance(GIT_USER_INSTRUCTIONS);
            }
        }

        let email_issue = check_author_email(&info.author_email, identity);
        let email_ok = email_issue.is_none();
        if let Some(issue) = email_issue {
            result.push_issue(issue);
        }

        let identity_ok = name_ok && email_ok;
        if !identity_ok {
            result.push_guidance(GIT_USER_INSTRUCTIONS);
        }

        let body_ok = verify_body(
            &info.body,
            &self.config.message,
            self.normalizer.as_ref(),
            &mut result,
        );

        tracing::debug!(
            commit = %info.abbrev_id,
            identity_ok,
            body_ok,
            "Checked commit"
        );

        if !(identity_ok && body_ok) {
            result.fail();
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Libgit2Prettify;
    use crate::rules::ReportItem;

    fn commit(name: &str, email: &str, body: &str) -> CommitInfo {
        CommitInfo {
            abbrev_id: "1a2b3c4".to_string(),
            author_name: name.to_string(),
            author_email: email.to_string(),
            body: body.to_string(),
        }
    }

    fn checker() -> CommitChecker {
        CommitChecker::with_normalizer(VcConfig::default(), Box::new(Libgit2Prettify))
    }

    fn instruction_count(result: &ValidationResult) -> usize {
        result
            .items
            .iter()
            .filter(|item| matches!(item, ReportItem::Guidance(g) if g == GIT_USER_INSTRUCTIONS))
            .count()
    }

    #[test]
    fn test_clean_commit() {
        let result = checker().check(&commit(
            "Jane Doe",
            "jane@realmail.org",
            "epan: fix leak\n\nFree the buffer on error.\n",
        ));
        assert!(result.is_valid());
        assert_eq!(result.exit_code(), 0);
        assert!(result.items.is_empty());
        assert_eq!(result.subject.as_deref(), Some("epan: fix leak"));
    }

    #[test]
    fn test_bad_identity_with_good_body() {
        let result = checker().check(&commit("root", "a@b.local", "dns: fix\n"));
        assert_eq!(result.exit_code(), 1);
        assert!(result.has_code("author-name-forbidden"));
        assert!(result.has_code("author-email-forbidden"));
        assert_eq!(instruction_count(&result), 1);
        assert_eq!(result.errors().count(), 2);
        assert!(!result.has_code("subject-blank-line"));
        assert!(!result.has_code("message-whitespace"));
    }

    #[test]
    fn test_login_name_only_warns() {
        let result = checker().check(&commit("jdoe", "jdoe@realmail.org", "dns: fix\n"));
        assert!(result.is_valid());
        assert!(result.has_code("author-name-no-space"));
        assert_eq!(instruction_count(&result), 1);
    }

    #[test]
    fn test_body_failure_alone() {
        let result = checker().check(&commit("Jane Doe", "jane@realmail.org", "dns: fix\nx\n"));
        assert_eq!(result.exit_code(), 1);
        assert_eq!(instruction_count(&result), 0);
        assert!(result.has_code("subject-blank-line"));
    }

    #[test]
    fn test_verdict_matches_body_check() {
        let config = VcConfig::default();
        for body in [
            "dns: fix\n",
            "dns: fix\nx\n",
            "dns: fix  \n",
            "dns: fix\n\nBug: 12\n",
            "",
        ] {
            let mut report = ValidationResult::new();
            let passed = verify_body(body, &config.message, &Libgit2Prettify, &mut report);
            let result = checker().check(&commit("Jane Doe", "jane@realmail.org", body));
            assert_eq!(result.is_valid(), passed, "body {:?}", body);
            assert_eq!(result.exit_code(), if passed { 0 } else { 1 });
        }
    }

    #[test]
    fn test_identity_issues_precede_body_issues() {
        let result = checker().check(&commit("user", "user@example.com", "dns: fix\n\nBug: 1\n"));
        let codes: Vec<&str> = result.issues().map(|i| i.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["author-name-forbidden", "author-email-forbidden", "issue-trailer"]
        );
    }
}
