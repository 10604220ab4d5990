// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and managing git hooks.

use crate::error::{HookError, Result, VcError};
use crate::git;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use super::templates::{HookTemplate, HOOK_MARKER};

/// Manager for git hooks.
pub struct HookManager {
    hooks_dir: PathBuf,
    program: String,
}

impl HookManager {
    /// Create a hook manager for the current repository, installing hooks
    /// that run the current executable.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        let program = std::env::current_exe()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|_| "validate-commit".to_string());
        Ok(Self::with_dir(repo.hooks_dir(), program))
    }

    /// Create a hook manager for an explicit hooks directory.
    pub fn with_dir(hooks_dir: impl Into<PathBuf>, program: impl Into<String>) -> Self {
        Self {
            hooks_dir: hooks_dir.into(),
            program: program.into(),
        }
    }

    /// Install a specific hook.
    pub fn install_hook(&self, hook_name: &str, force: bool) -> Result<()> {
        let template = hook_name.parse::<HookTemplate>()?;
        self.install_template(&template, force)
    }

    /// Install all hooks.
    pub fn install_all(&self, force: bool) -> Result<()> {
        for template in HookTemplate::all() {
            self.install_template(template, force)?;
        }
        Ok(())
    }

    /// Install a hook from a template.
    fn install_template(&self, template: &HookTemplate, force: bool) -> Result<()> {
        let hook = template.filename();
        let hook_path = self.hooks_dir.join(hook);
        let backup_path = self.hooks_dir.join(format!("{}.backup", hook));
        let install_failed = |message: String| {
            VcError::Hook(HookError::InstallFailed {
                hook: hook.to_string(),
                message,
            })
        };

        fs::create_dir_all(&self.hooks_dir)
            .map_err(|e| install_failed(format!("Failed to create hooks directory: {}", e)))?;

        if hook_path.exists() && !self.is_own_hook(&hook_path)? {
            if !force {
                return Err(VcError::Hook(HookError::AlreadyExists {
                    hook: hook.to_string(),
                }));
            }
            tracing::debug!("Backing up {:?} to {:?}", hook_path, backup_path);
            fs::rename(&hook_path, &backup_path)
                .map_err(|e| install_failed(format!("Failed to backup existing hook: {}", e)))?;
        }

        let script = template.generate(&self.program)?;
        fs::write(&hook_path, script)
            .map_err(|e| install_failed(format!("Failed to write hook: {}", e)))?;

        let mut perms = fs::metadata(&hook_path)
            .map_err(|e| install_failed(format!("Failed to get permissions: {}", e)))?
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)
            .map_err(|e| install_failed(format!("Failed to set permissions: {}", e)))?;

        tracing::debug!("Installed {:?}", hook_path);
        Ok(())
    }

    /// Uninstall a specific hook, restoring any backed up hook.
    pub fn uninstall_hook(&self, hook_name: &str) -> Result<()> {
        let template = hook_name.parse::<HookTemplate>()?;
        let hook = template.filename();
        let hook_path = self.hooks_dir.join(hook);
        let backup_path = self.hooks_dir.join(format!("{}.backup", hook));

        if !hook_path.exists() {
            return Ok(());
        }

        if !self.is_own_hook(&hook_path)? {
            return Err(VcError::Hook(HookError::RemoveFailed {
                hook: hook.to_string(),
                message: "Hook was not installed by validate-commit".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            VcError::Hook(HookError::RemoveFailed {
                hook: hook.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).map_err(|e| {
                VcError::Hook(HookError::RemoveFailed {
                    hook: hook.to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
        }

        Ok(())
    }

    /// Uninstall all hooks.
    pub fn uninstall_all(&self) -> Result<()> {
        for template in HookTemplate::all() {
            self.uninstall_hook(template.filename())?;
        }
        Ok(())
    }

    /// Get the status of all hooks.
    pub fn status(&self) -> Result<Vec<(String, bool)>> {
        HookTemplate::all()
            .iter()
            .map(|template| {
                let hook_path = self.hooks_dir.join(template.filename());
                let installed = hook_path.exists() && self.is_own_hook(&hook_path)?;
                Ok((template.filename().to_string(), installed))
            })
            .collect()
    }

    /// Check if a hook was installed by this tool.
    fn is_own_hook(&self, path: &Path) -> Result<bool> {
        let content = fs::read(path).map_err(|e| {
            VcError::Hook(HookError::InstallFailed {
                hook: path.display().to_string(),
                message: format!("Failed to read hook: {}", e),
            })
        })?;

        Ok(String::from_utf8_lossy(&content).contains(HOOK_MARKER))
    }
}
