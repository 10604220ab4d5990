// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository discovery.

use crate::error::{GitError, Result, VcError};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open the repository containing the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            VcError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                VcError::Git(GitError::NotARepository)
            } else {
                VcError::Git(GitError::from(e))
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Directory git runs hooks from, honouring `core.hooksPath`.
    pub fn hooks_dir(&self) -> PathBuf {
        let configured = self
            .inner
            .config()
            .and_then(|config| config.get_path("core.hooksPath"))
            .ok();

        match configured {
            Some(path) if path.is_absolute() => path,
            Some(path) => self
                .inner
                .workdir()
                .unwrap_or_else(|| self.git_dir())
                .join(path),
            None => self.git_dir().join("hooks"),
        }
    }
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}
