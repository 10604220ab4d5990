// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Unified diffs of commit messages.

use crate::error::{GitError, Result, VcError};
use std::path::Path;

/// Comment inserted before diff lines ending in whitespace.
///
/// GNU patch ignores lines starting with `#`, so the annotated diff can
/// still be applied.
pub const TRAILING_SPACE_NOTE: &str = "# NOTE: trailing space on the next line\n";

/// Render a unified diff between two texts.
///
/// Each returned line keeps its terminating newline. Returns an empty
/// vector when the texts are equal.
pub fn unified_diff(old: &str, new: &str, old_name: &str, new_name: &str) -> Result<Vec<String>> {
    let mut patch = git2::Patch::from_buffers(
        old.as_bytes(),
        Some(Path::new(old_name)),
        new.as_bytes(),
        Some(Path::new(new_name)),
        None,
    )
    .map_err(diff_error)?;

    if patch.num_hunks() == 0 {
        return Ok(Vec::new());
    }

    let mut lines = vec![format!("--- {}\n", old_name), format!("+++ {}\n", new_name)];
    patch
        .print(&mut |_delta, _hunk, line| {
            let content = String::from_utf8_lossy(line.content());
            match line.origin() {
                // File header, replaced by the plain one above.
                'F' => {}
                ' ' | '+' | '-' => lines.push(format!("{}{}", line.origin(), content)),
                'H' => lines.push(hunk_range(&content)),
                // "\ No newline at end of file" markers.
                _ => lines.push(content.into_owned()),
            }
            true
        })
        .map_err(diff_error)?;

    Ok(lines)
}

/// Prefix every diff line whose last visible character is whitespace with
/// [`TRAILING_SPACE_NOTE`].
pub fn annotate_trailing_whitespace(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| {
            let mut chars = line.chars().rev();
            let _terminator = chars.next();
            let flagged =
                line.chars().count() > 2 && chars.next().is_some_and(char::is_whitespace);
            if flagged {
                format!("{}{}", TRAILING_SPACE_NOTE, line)
            } else {
                line.clone()
            }
        })
        .collect()
}

/// Drop the function context libgit2 appends after the hunk range.
fn hunk_range(header: &str) -> String {
    match header.get(2..).and_then(|rest| rest.find("@@")) {
        Some(pos) => format!("{}\n", &header[..pos + 4]),
        None => header.to_string(),
    }
}

fn diff_error(err: git2::Error) -> VcError {
    VcError::Git(GitError::DiffFailed {
        message: err.message().to_string(),
    })
}
