// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::{default::example_config, VcConfig};
use crate::error::{ConfigError, Result, ResultExt, VcError};
use crate::hooks::HookManager;
use crate::rules::CommitChecker;

use super::args::{Cli, Commands, HooksAction, HooksArgs, InitArgs};

/// Name of the file written by `init`.
const CONFIG_FILE_NAME: &str = "validate-commit.toml";

/// Run the CLI with the given arguments, returning the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    match cli.command.clone() {
        Some(Commands::Hooks(args)) => run_hooks(args),
        Some(Commands::Init(args)) => run_init(args),
        Some(Commands::Version) => run_version(),
        None => run_check(&cli, load_config(&cli)?),
    }
}

/// Load the configuration and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<VcConfig> {
    let mut config = if let Some(config_path) = &cli.config {
        VcConfig::load_from(config_path)?
    } else {
        VcConfig::load()?
    };

    if let Some(backend) = cli.normalizer {
        config.normalizer.backend = backend;
    }

    Ok(config)
}

/// Validate one commit.
fn run_check(cli: &Cli, config: VcConfig) -> Result<i32> {
    tracing::debug!("Checking commit {} with {:?}", cli.commit, config);

    let checker = CommitChecker::new(config);
    let result = checker.check_reference(&cli.commit)?;

    // In hook mode a passing commit produces no output at all.
    if !(cli.quiet && result.items.is_empty()) {
        result.print(!cli.quiet)?;
    }

    tracing::debug!("{}", result.summary());
    Ok(result.exit_code())
}

/// Run the hooks command.
fn run_hooks(args: HooksArgs) -> Result<i32> {
    tracing::debug!("Running hooks command: {:?}", args.action);

    let manager = HookManager::new()?;

    match args.action {
        HooksAction::Install { hook, force } => {
            if let Some(hook_name) = hook {
                manager.install_hook(&hook_name, force)?;
                println!("✓ Installed {} hook", hook_name);
            } else {
                manager.install_all(force)?;
                println!("✓ Installed all hooks");
            }
        }
        HooksAction::Uninstall { hook } => {
            if let Some(hook_name) = hook {
                manager.uninstall_hook(&hook_name)?;
                println!("✓ Uninstalled {} hook", hook_name);
            } else {
                manager.uninstall_all()?;
                println!("✓ Uninstalled all hooks");
            }
        }
        HooksAction::Status => {
            for (hook, installed) in manager.status()? {
                let icon = if installed { "✓" } else { "✗" };
                println!("{} {}", icon, hook);
            }
        }
    }

    Ok(0)
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<i32> {
    let config_path = std::path::Path::new(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        return Err(VcError::Config(ConfigError::InvalidValue {
            key: CONFIG_FILE_NAME.to_string(),
            message: "file already exists, use --force to overwrite".to_string(),
        }));
    }

    std::fs::write(config_path, example_config()).context("init")?;
    println!("✓ Created {}", CONFIG_FILE_NAME);

    Ok(0)
}

/// Run the version command.
fn run_version() -> Result<i32> {
    println!("validate-commit {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(0)
}
