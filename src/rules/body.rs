// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message body rules.

use crate::config::MessageConfig;
use crate::git::{annotate_trailing_whitespace, unified_diff};
use crate::normalize::Normalizer;
use lazy_static::lazy_static;
use regex::Regex;

use super::subject::extract_subject;
use super::validator::{ValidationIssue, ValidationResult};

lazy_static! {
    /// Issue number following a retired trailer, e.g. `Bug: 1234`.
    static ref ISSUE_NUMBER: Regex = Regex::new(r"^\s*#?(\d+)").unwrap();
}

/// Expected shape of a commit message.
pub const MESSAGE_FORMAT_GUIDANCE: &str = "
Please rewrite your commit message to our standards, matching this format:

    component: a very brief summary of the change

    A commit message should start with a brief summary, followed by a single
    blank line and an optional longer description. If the change is specific to
    a single protocol, start the summary line with the abbreviated name of the
    protocol and a colon.

    Use paragraphs to improve readability. Limit each line to 80 characters.
";

const DIFF_OLD_NAME: &str = "OLD/.git/COMMIT_EDITMSG";
const DIFF_NEW_NAME: &str = "NEW/.git/COMMIT_EDITMSG";

/// Validate the commit message `body`, recording findings in `report`.
///
/// Returns whether the message passes. A message carrying a retired
/// issue trailer fails without running the whitespace check. An
/// unavailable normalizer only produces a warning.
pub fn verify_body(
    body: &str,
    policy: &MessageConfig,
    normalizer: &dyn Normalizer,
    report: &mut ValidationResult,
) -> bool {
    let old_lines = split_lines(body);
    let mut is_good = true;

    if old_lines.get(1).is_some_and(|line| !line.trim().is_empty()) {
        report.push_issue(
            ValidationIssue::error(
                "subject-blank-line",
                "missing blank line after the first subject line",
            )
            .at_line(2),
        );
        is_good = false;
    }

    let cleaned_subject = extract_subject(old_lines.first().copied().unwrap_or(""));
    let length = cleaned_subject.chars().count();
    if length > policy.max_subject_length {
        report.push_issue(
            ValidationIssue::error(
                "subject-max-length",
                format!(
                    "keep lines in the commit message under {} characters (subject has {})",
                    policy.max_subject_length, length
                ),
            )
            .at_line(1),
        );
        is_good = false;
    }

    if !is_good {
        report.push_guidance(MESSAGE_FORMAT_GUIDANCE);
    }

    if let Some((index, trailer, line)) = find_forbidden_trailer(&old_lines, policy) {
        let number = ISSUE_NUMBER
            .captures(&line[trailer.len()..])
            .and_then(|caps| caps.get(1))
            .map_or("1234", |m| m.as_str());
        report.push_issue(
            ValidationIssue::error(
                "issue-trailer",
                format!("'{}' trailers are not supported", trailer.trim_end_matches(':')),
            )
            .at_line(index + 1)
            .with_suggestion(format!(
                "To close an issue, use \"Closes #{n}\" or \"Fixes #{n}\". \
                 To reference an issue, use \"related to #{n}\".",
                n = number
            )),
        );
        return false;
    }

    let new_body = match normalizer.normalize(body) {
        Ok(new_body) => new_body,
        Err(e) => {
            tracing::warn!("Message normalizer unavailable: {}", e);
            report.push_issue(ValidationIssue::warning(
                "normalizer-unavailable",
                format!("unable to normalize the commit message: {}", e),
            ));
            return is_good;
        }
    };

    if new_body != body {
        report.push_issue(
            ValidationIssue::error(
                "message-whitespace",
                "The commit message does not follow our standards.",
            )
            .with_suggestion("Please rewrite it (there are likely whitespace issues):"),
        );
        match unified_diff(body, &new_body, DIFF_OLD_NAME, DIFF_NEW_NAME) {
            Ok(lines) => report.push_guidance(annotate_trailing_whitespace(&lines)),
            Err(e) => tracing::warn!("{}", e),
        }
        return false;
    }

    is_good
}

/// First line starting with a forbidden trailer: (index, trailer, line).
/// Whether `c` ends a line. Besides LF and CR this covers the vertical
/// tab, form feed, the ASCII separators and the Unicode line breaks.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split `text` into lines, keeping each terminator. CRLF is one break.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        let mut end = index + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            end += 1;
        }
        lines.push(&text[start..end]);
        start = end;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn find_forbidden_trailer<'a>(
    lines: &[&'a str],
    policy: &'a MessageConfig,
) -> Option<(usize, &'a str, &'a str)> {
    lines.iter().enumerate().find_map(|(index, line)| {
        policy
            .forbidden_trailers
            .iter()
            .find(|trailer| line.starts_with(trailer.as_str()))
            .map(|trailer| (index, trailer.as_str(), *line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, VcError};
    use crate::normalize::Libgit2Prettify;
    use crate::rules::ReportItem;

    struct Unchanged;

    impl Normalizer for Unchanged {
        fn normalize(&self, message: &str) -> Result<String> {
            Ok(message.to_string())
        }
    }

    struct Unavailable;

    impl Normalizer for Unavailable {
        fn normalize(&self, _message: &str) -> Result<String> {
            Err(VcError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "git not found",
            )))
        }
    }

    struct Panics;

    impl Normalizer for Panics {
        fn normalize(&self, _message: &str) -> Result<String> {
            panic!("normalizer must not run");
        }
    }

    fn verify(body: &str, normalizer: &dyn Normalizer) -> (bool, ValidationResult) {
        let mut report = ValidationResult::new();
        let ok = verify_body(body, &MessageConfig::default(), normalizer, &mut report);
        (ok, report)
    }

    fn has_guidance(report: &ValidationResult) -> bool {
        report
            .items
            .iter()
            .any(|item| matches!(item, ReportItem::Guidance(g) if g == MESSAGE_FORMAT_GUIDANCE))
    }

    #[test]
    fn test_split_lines_on_every_break() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a\r\n", "b\r", "c\n", "d"]);
        assert_eq!(split_lines("a\x0bb\u{2028}c"), vec!["a\x0b", "b\u{2028}", "c"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_carriage_return_needs_blank_line() {
        let (ok, report) = verify("subj\rmore", &Unchanged);
        assert!(!ok);
        assert!(report.has_code("subject-blank-line"));

        let (ok, _) = verify("subj\r\rmore", &Unchanged);
        assert!(ok);
    }

    #[test]
    fn test_well_formed_body_passes() {
        let body = "epan: fix buffer overrun\n\nCheck the length before copying.\n";
        let (ok, report) = verify(body, &Libgit2Prettify);
        assert!(ok);
        assert!(report.items.is_empty());
    }

    #[test]
    fn test_missing_blank_line() {
        let (ok, report) = verify("dns: fix\nmore details\n", &Unchanged);
        assert!(!ok);
        assert!(report.has_code("subject-blank-line"));
        assert!(has_guidance(&report));
    }

    #[test]
    fn test_whitespace_only_second_line_is_blank() {
        let (ok, report) = verify("dns: fix\n   \nmore\n", &Unchanged);
        assert!(ok);
        assert!(!report.has_code("subject-blank-line"));
    }

    #[test]
    fn test_long_subject() {
        let body = format!("{}\n", "x".repeat(90));
        let (ok, report) = verify(&body, &Unchanged);
        assert!(!ok);
        assert!(report.has_code("subject-max-length"));
        assert!(has_guidance(&report));
    }

    #[test]
    fn test_subject_length_ignores_revert_wrappers() {
        let inner = "y".repeat(75);
        let body = format!("Revert \"Revert \"{}\"\"\n", inner);
        let (ok, report) = verify(&body, &Unchanged);
        assert!(ok, "{:?}", report);
    }

    #[test]
    fn test_exactly_max_length_subject_passes() {
        let body = format!("{}\n", "z".repeat(80));
        let (ok, _) = verify(&body, &Unchanged);
        assert!(ok);
    }

    #[test]
    fn test_bug_trailer_fails_before_normalizer() {
        let (ok, report) = verify("dns: fix\n\nBug: 1234\n", &Panics);
        assert!(!ok);
        let issue = report.issues().find(|i| i.code == "issue-trailer").unwrap();
        assert_eq!(issue.line, Some(3));
        assert!(issue.suggestion.as_deref().unwrap().contains("Closes #1234"));
        assert!(!has_guidance(&report));
    }

    #[test]
    fn test_ping_bug_trailer() {
        let (ok, report) = verify("dns: fix\n\nPing-Bug: 42\n", &Panics);
        assert!(!ok);
        let issue = report.issues().find(|i| i.code == "issue-trailer").unwrap();
        assert!(issue.message.contains("Ping-Bug"));
        assert!(issue.suggestion.as_deref().unwrap().contains("related to #42"));
    }

    #[test]
    fn test_trailer_must_start_the_line() {
        let (ok, _) = verify("dns: fix\n\nSee Bug: 1234\n", &Unchanged);
        assert!(ok);
    }

    #[test]
    fn test_unavailable_normalizer_keeps_earlier_result() {
        let (ok, report) = verify("dns: fix\n", &Unavailable);
        assert!(ok);
        assert!(report.has_code("normalizer-unavailable"));

        let (ok, _) = verify("dns: fix\nno blank\n", &Unavailable);
        assert!(!ok);
    }

    #[test]
    fn test_trailing_whitespace_is_reported_with_diff() {
        let body = "dns: fix  \n\nbody\n\n\n";
        let (ok, report) = verify(body, &Libgit2Prettify);
        assert!(!ok);
        assert!(report.has_code("message-whitespace"));

        let diff = report
            .items
            .iter()
            .find_map(|item| match item {
                ReportItem::Guidance(g) => Some(g.clone()),
                _ => None,
            })
            .unwrap();
        assert!(diff.starts_with("--- OLD/.git/COMMIT_EDITMSG\n+++ NEW/.git/COMMIT_EDITMSG\n"));
        assert!(diff.contains("# NOTE: trailing space on the next line\n-dns: fix  \n"));
        assert!(diff.contains("+dns: fix\n"));
    }

    #[test]
    fn test_normalized_body_always_passes() {
        let messages = [
            "dns: fix\n",
            "tcp: tidy up\n\nFirst paragraph.\n\nSecond paragraph.\n",
            "Revert \"udp: x\"\n\nThis reverts commit abc.\n",
        ];
        for message in messages {
            let normalized = Libgit2Prettify.normalize(message).unwrap();
            let (ok, report) = verify(&normalized, &Libgit2Prettify);
            assert!(ok, "{:?}: {:?}", message, report);
        }
    }

    #[test]
    fn test_closure_normalizer_is_accepted() {
        let strip = |message: &str| -> Result<String> { Ok(message.trim_end().to_string() + "\n") };
        let (ok, report) = verify("dns: fix\n\n", &strip);
        assert!(!ok);
        assert!(report.has_code("message-whitespace"));
    }

    #[test]
    fn test_empty_body_does_not_panic() {
        let (ok, _) = verify("", &Unchanged);
        assert!(ok);
    }
}
