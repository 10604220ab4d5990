// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Wrapper for running the git executable.

use crate::error::{GitError, Result, VcError};
use std::io::Write;
use std::process::{Command, Stdio};

/// A git invocation, optionally fed on standard input.
#[derive(Debug, Clone)]
pub struct GitCommand {
    program: String,
    args: Vec<String>,
}

impl GitCommand {
    /// Create a command running `program` (usually `git`).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The command line, for diagnostics.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the command and return its standard output.
    ///
    /// A non-zero exit is a [`GitError::CommandFailed`] carrying the exit
    /// code and the tool's standard error.
    pub fn output(&self, stdin: Option<&str>) -> Result<String> {
        let command = self.display();
        tracing::debug!("Running: {}", command);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                VcError::Git(GitError::SpawnFailed {
                    command: command.clone(),
                    message: e.to_string(),
                })
            })?;

        // The writer runs beside the reader so a tool that streams its output
        // cannot fill both pipes and stall.
        let (output, written) = std::thread::scope(|scope| {
            let writer = match (stdin, child.stdin.take()) {
                // Dropping the handle closes the pipe so the child sees EOF.
                (Some(input), Some(mut pipe)) => {
                    Some(scope.spawn(move || pipe.write_all(input.as_bytes())))
                }
                _ => None,
            };
            let output = child.wait_with_output();
            let written = match writer {
                Some(handle) => handle.join().unwrap_or_else(|_| {
                    Err(std::io::Error::new(
                        std::io::ErrorKind::Other,
                        "standard input writer panicked",
                    ))
                }),
                None => Ok(()),
            };
            (output, written)
        });

        let output = output.map_err(|e| {
            VcError::Git(GitError::SpawnFailed {
                command: command.clone(),
                message: e.to_string(),
            })
        })?;

        tracing::debug!("{} exited with {}", command, output.status);

        if !output.status.success() {
            return Err(VcError::Git(GitError::CommandFailed {
                command,
                code: output.status.code(),
                message: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            }));
        }

        written.map_err(|e| {
            VcError::Git(GitError::SpawnFailed {
                command: command.clone(),
                message: format!("Failed to write standard input: {}", e),
            })
        })?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let cmd = GitCommand::new("git").args(["show", "--no-patch", "HEAD"]);
        assert_eq!(cmd.display(), "git show --no-patch HEAD");
    }

    #[test]
    fn test_missing_program_is_spawn_failure() {
        let err = GitCommand::new("definitely-not-a-real-git-binary")
            .args(["stripspace"])
            .output(Some("text\n"))
            .unwrap_err();
        assert!(matches!(err, VcError::Git(GitError::SpawnFailed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_large_input_through_streaming_tool() {
        // Larger than both pipe buffers combined.
        let line = "x".repeat(1023) + "\n";
        let input = line.repeat(1024);
        let output = GitCommand::new("cat").output(Some(&input)).unwrap();
        assert_eq!(output.len(), input.len());
        assert!(output == input);
    }

    #[test]
    fn test_non_zero_exit_carries_code() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = GitCommand::new("git")
            .args([
                "-C",
                dir.path().to_str().unwrap(),
                "show",
                "--no-patch",
                "HEAD",
                "--",
            ])
            .output(None)
            .unwrap_err();
        assert_eq!(err.exit_code(), 128);
    }
}
