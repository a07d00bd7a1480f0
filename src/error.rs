//! Error types for gtnlint operations.
//!
//! This module defines [`GtnLintError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Rules never fail: a pattern that does not match yields no diagnostic
//! - Reading or parsing an input file is fatal for that file only
//! - Failures writing fixed files carry `anyhow` context (`GtnLintError::Other`)

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gtnlint operations.
#[derive(Debug, Error)]
pub enum GtnLintError {
    /// An input file could not be read.
    #[error("Failed to read {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A bibliography file could not be parsed.
    #[error("Failed to parse bibliography {path}: {message}")]
    BibliographyParse { path: PathBuf, message: String },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gtnlint operations.
pub type Result<T> = std::result::Result<T, GtnLintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_unreadable_displays_path_and_cause() {
        let err = GtnLintError::FileUnreadable {
            path: PathBuf::from("topics/x/tutorial.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("topics/x/tutorial.md"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn bibliography_parse_displays_path_and_message() {
        let err = GtnLintError::BibliographyParse {
            path: PathBuf::from("tutorial.bib"),
            message: "unexpected end of file".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("tutorial.bib"));
        assert!(msg.contains("unexpected end of file"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = GtnLintError::ConfigNotFound {
            path: PathBuf::from("/repo/.gtnlint.yml"),
        };
        assert!(err.to_string().contains("/repo/.gtnlint.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = GtnLintError::ConfigParseError {
            path: PathBuf::from(".gtnlint.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains(".gtnlint.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GtnLintError = io_err.into();
        assert!(matches!(err, GtnLintError::Io(_)));
    }

    #[test]
    fn anyhow_context_converts_to_other() {
        let err: GtnLintError = anyhow::anyhow!("permission denied")
            .context("Failed to write fixes to t.md")
            .into();

        assert!(matches!(err, GtnLintError::Other(_)));
        assert_eq!(err.to_string(), "Failed to write fixes to t.md");
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(GtnLintError::ConfigNotFound {
                path: PathBuf::from("x"),
            })
        }
        assert!(returns_error().is_err());
    }
}
