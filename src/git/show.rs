// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Reading commit metadata with `git show`.

use crate::error::{GitError, Result, VcError};

use super::commands::GitCommand;

/// Pretty format for `git show`: one field per line, message body last.
///
/// `tformat` terminates the record with exactly one newline, which
/// [`parse_show_output`] removes again.
pub const SHOW_FORMAT: &str = "tformat:%h%n%an%n%ae%n%B";

/// Number of newline-separated fields in [`SHOW_FORMAT`].
const FIELD_COUNT: usize = 4;

/// Metadata of the commit under validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Abbreviated commit id.
    pub abbrev_id: String,
    /// Author display name.
    pub author_name: String,
    /// Author email address.
    pub author_email: String,
    /// Raw commit message.
    pub body: String,
}

impl CommitInfo {
    /// First line of the message.
    pub fn subject(&self) -> &str {
        self.body.split('\n').next().unwrap_or("")
    }
}

/// Fetch the metadata of `reference` using the given git executable.
pub fn fetch_commit(git: &str, reference: &str) -> Result<CommitInfo> {
    let format = format!("--format={}", SHOW_FORMAT);
    let command = GitCommand::new(git).args(["show", "--no-patch", &format, reference, "--"]);
    let output = command.output(None)?;
    parse_show_output(&output).ok_or_else(|| {
        VcError::Git(GitError::MalformedOutput {
            command: command.display(),
            expected: FIELD_COUNT,
            found: output.splitn(FIELD_COUNT, '\n').count(),
        })
    })
}

/// Split `git show` output produced with [`SHOW_FORMAT`] into its fields.
///
/// Returns `None` if fewer than four fields are present. Exactly one
/// trailing newline (the record terminator) is removed from the body,
/// whether or not the message itself ends with a newline.
pub fn parse_show_output(output: &str) -> Option<CommitInfo> {
    let mut fields = output.splitn(FIELD_COUNT, '\n');
    let abbrev_id = fields.next()?;
    let author_name = fields.next()?;
    let author_email = fields.next()?;
    let raw_body = fields.next()?;
    let body = raw_body.strip_suffix('\n').unwrap_or(raw_body);

    Some(CommitInfo {
        abbrev_id: abbrev_id.to_string(),
        author_name: author_name.to_string(),
        author_email: author_email.to_string(),
        body: body.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_regular_commit() {
        let output = "1a2b3c4\nJane Doe\njane@realmail.org\nepan: fix leak\n\nDetails.\n\n";
        let info = parse_show_output(output).unwrap();
        assert_eq!(info.abbrev_id, "1a2b3c4");
        assert_eq!(info.author_name, "Jane Doe");
        assert_eq!(info.author_email, "jane@realmail.org");
        assert_eq!(info.body, "epan: fix leak\n\nDetails.\n");
        assert_eq!(info.subject(), "epan: fix leak");
    }

    #[test]
    fn test_parse_message_without_trailing_newline() {
        let info = parse_show_output("abc\nA B\na@b.org\nsubject only\n").unwrap();
        assert_eq!(info.body, "subject only");
    }

    #[test]
    fn test_parse_empty_message() {
        let info = parse_show_output("abc\nA B\na@b.org\n\n").unwrap();
        assert_eq!(info.body, "");
        assert_eq!(info.subject(), "");
    }

    #[test]
    fn test_parse_too_few_fields() {
        assert!(parse_show_output("abc\nA B\n").is_none());
    }
}
