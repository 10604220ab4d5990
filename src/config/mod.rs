// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for validate-commit.
//!
//! Every setting is optional. Without a configuration file the tool applies
//! the built-in contribution policy.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
