// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit validation rules.
//!
//! Identity rules check the author name and email, body rules check the
//! commit message. [`CommitChecker`] runs all of them for one commit.

mod body;
mod engine;
mod identity;
mod subject;
mod validator;

pub use body::{verify_body, MESSAGE_FORMAT_GUIDANCE};
pub use engine::CommitChecker;
pub use identity::{
    check_author_email, check_author_name, check_email, check_name, verify_email, verify_name,
    EmailRejection, NameVerdict, GIT_USER_INSTRUCTIONS,
};
pub use subject::extract_subject;
pub use validator::{ReportItem, ValidationIssue, ValidationResult};
