//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::schema::LintConfig;
use crate::error::{GtnLintError, Result};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = ".gtnlint.yml";

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. a `.gtnlint.yml` file (primary indicator)
/// 2. a `.git` directory (fallback)
///
/// # Returns
///
/// The path to the project root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GtnLintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GtnLintError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`LintConfig`].
///
/// An empty document (blank or comments only) is the default configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LintConfig> {
    if content.trim().is_empty() {
        return Ok(LintConfig::default());
    }

    serde_yaml::from_str::<Option<LintConfig>>(content)
        .map(Option::unwrap_or_default)
        .map_err(|e| GtnLintError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Load the configuration for a project.
///
/// An explicit `config_override` must exist. Otherwise `.gtnlint.yml` in
/// `project_root` is used when present, and defaults when it is not.
pub fn load_project_config(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<LintConfig> {
    if let Some(path) = config_override {
        debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        debug!("Loading config from {}", path.display());
        load_config_file(&path)
    } else {
        debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, project_root.display());
        Ok(LintConfig::default())
    }
}
