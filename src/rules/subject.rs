// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Subject line helpers.

const REVERT_PREFIX: &str = "Revert \"";
const REVERT_SUFFIX: &str = "\"";

/// Extract the original subject, ignoring any number of `Revert "..."`
/// wrappers. Trailing CR/LF characters are dropped first.
pub fn extract_subject(subject: &str) -> &str {
    let mut subject = subject.trim_end_matches(['\r', '\n']);
    while subject.starts_with(REVERT_PREFIX) && subject.ends_with(REVERT_SUFFIX) {
        let end = subject.len() - REVERT_SUFFIX.len();
        subject = subject.get(REVERT_PREFIX.len()..end).unwrap_or("");
    }
    subject
}
