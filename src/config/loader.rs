// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery and loading.

use crate::error::{ConfigError, Result, VcError};
use std::path::{Path, PathBuf};

use super::schema::VcConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    "validate-commit.toml",
    ".validate-commit.toml",
    ".config/validate-commit.toml",
];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
    }

    // XDG config directory
    let xdg = dirs::config_dir()?.join("validate-commit").join("config.toml");
    xdg.is_file().then_some(xdg)
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<VcConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(VcConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<VcConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(VcError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        VcError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<VcConfig> {
    let config: VcConfig = toml::from_str(content).map_err(|e| {
        VcError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    if config.message.max_subject_length == 0 {
        return Err(VcError::Config(ConfigError::InvalidValue {
            key: "message.max_subject_length".to_string(),
            message: "must be greater than zero".to_string(),
        }));
    }
    if config.normalizer.git.trim().is_empty() {
        return Err(VcError::Config(ConfigError::InvalidValue {
            key: "normalizer.git".to_string(),
            message: "must name a git executable".to_string(),
        }));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NormalizerBackend;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config, VcConfig::default());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[identity]
forbidden_names = ["builder"]
reserved_domain_suffix = ".corp.example"

[message]
max_subject_length = 72

[normalizer]
backend = "libgit2"
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.identity.forbidden_names, vec!["builder"]);
        assert_eq!(config.identity.reserved_domain_suffix, ".corp.example");
        assert_eq!(config.identity.placeholder_domain, "example.com");
        assert_eq!(config.message.max_subject_length, 72);
        assert_eq!(config.normalizer.backend, NormalizerBackend::Libgit2);
        assert_eq!(config.normalizer.git, "git");
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_config("[message\nmax_subject_length = ").unwrap_err();
        assert!(matches!(err, VcError::Config(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_zero_subject_length_rejected() {
        let err = parse_config("[message]\nmax_subject_length = 0\n").unwrap_err();
        assert!(err.to_string().contains("message.max_subject_length"));
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(parse_config("[normalizer]\nbackend = \"sed\"\n").is_err());
    }

    #[test]
    fn test_find_config_in_parent_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".validate-commit.toml"), "").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".validate-commit.toml"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_config_from(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, VcError::Config(ConfigError::NotFound { .. })));
    }
}
