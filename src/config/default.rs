// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::VcConfig;

/// Get the default configuration.
pub fn default_config() -> VcConfig {
    VcConfig::default()
}

/// An annotated configuration file spelling out every default.
pub fn example_config() -> &'static str {
    r#"# validate-commit configuration

# Author identity policy
[identity]
forbidden_names = ["unknown", "root", "user", "your name"]
reserved_domain_suffix = ".wireshark.org"
placeholder_domain = "example.com"

# Commit message policy
[message]
max_subject_length = 80
forbidden_trailers = ["Bug:", "Ping-Bug:"]

# Whitespace normalization: "git-stripspace", "libgit2" or "none"
[normalizer]
backend = "git-stripspace"
git = "git"
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_matches_defaults() {
        let config: VcConfig = toml::from_str(example_config()).expect("Example config should parse");
        assert_eq!(config, default_config());
    }
}
