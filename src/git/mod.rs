// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Commit metadata is read by shelling out to `git show`; diffs and
//! repository discovery go through libgit2.

pub mod commands;
pub mod diff;
mod repo;
pub mod show;

pub use commands::GitCommand;
pub use diff::{annotate_trailing_whitespace, unified_diff};
pub use repo::{open_repo, Repository};
pub use show::{fetch_commit, parse_show_output, CommitInfo, SHOW_FORMAT};
