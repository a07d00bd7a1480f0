//! Configuration loading for gtnlint.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use gtnlint::config::load_project_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".gtnlint.yml"), "disable: [no-toc]").unwrap();
//!
//! let config = load_project_config(temp.path(), None).unwrap();
//! assert_eq!(config.disable, vec!["no-toc"]);
//! ```
//!
//! # Precedence
//!
//! Command-line flags override the config file, which overrides defaults.

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_root, load_config_file, load_project_config, parse_config, CONFIG_FILE_NAME,
};
pub use schema::LintConfig;
