// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

use crate::error::{HookError, Result, VcError};
use handlebars::Handlebars;
use serde::Serialize;
use std::str::FromStr;

/// Marker line identifying scripts written by this tool.
pub const HOOK_MARKER: &str = "Generated by validate-commit";

const HOOK_SCRIPT: &str = r#"#!/bin/sh
# validate-commit {{hook}} hook
# {{marker}} {{version}}
#
# {{description}}
exec {{program}} --quiet HEAD
"#;

/// Hooks that can be installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTemplate {
    /// Report problems right after each commit.
    PostCommit,
    /// Refuse to push when the latest commit does not validate.
    PrePush,
}

#[derive(Serialize)]
struct HookContext<'a> {
    hook: &'a str,
    marker: &'a str,
    version: &'a str,
    description: &'a str,
    program: String,
}

impl HookTemplate {
    /// All hook templates.
    pub fn all() -> &'static [HookTemplate] {
        &[HookTemplate::PostCommit, HookTemplate::PrePush]
    }

    /// File name inside the hooks directory.
    pub fn filename(&self) -> &'static str {
        match self {
            HookTemplate::PostCommit => "post-commit",
            HookTemplate::PrePush => "pre-push",
        }
    }

    /// What the hook does.
    pub fn description(&self) -> &'static str {
        match self {
            HookTemplate::PostCommit => {
                "Checks the new commit. Git ignores the result, fix problems with --amend."
            }
            HookTemplate::PrePush => "Checks the latest commit and aborts the push if it fails.",
        }
    }

    /// Render the hook script invoking `program`.
    pub fn generate(&self, program: &str) -> Result<String> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);

        let context = HookContext {
            hook: self.filename(),
            marker: HOOK_MARKER,
            version: crate::version::VERSION,
            description: self.description(),
            program: shell_quote(program),
        };

        registry
            .render_template(HOOK_SCRIPT, &context)
            .map_err(|e| {
                VcError::Hook(HookError::RenderFailed {
                    hook: self.filename().to_string(),
                    message: e.to_string(),
                })
            })
    }
}

impl FromStr for HookTemplate {
    type Err = HookError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "post-commit" => Ok(HookTemplate::PostCommit),
            "pre-push" => Ok(HookTemplate::PrePush),
            _ => Err(HookError::NotFound {
                hook: s.to_string(),
            }),
        }
    }
}

/// Quote a word for POSIX sh.
fn shell_quote(word: &str) -> String {
    format!("'{}'", word.replace('\'', r"'\''"))
}
