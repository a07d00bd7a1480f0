//! gtnlint - Lint Galaxy Training Network tutorials and bibliographies.
//!
//! gtnlint scans tutorial Markdown and BibTeX files for known authoring
//! mistakes and reports them as reviewdog rdjson diagnostics, most with a
//! suggested replacement.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration discovery and loading
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Rules, registry, engine, fixes, and output formats
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use gtnlint::lint::{lint_source, RdjsonFormatter, RootedProbe, RuleRegistry};
//!
//! let registry = RuleRegistry::with_builtins();
//! let diagnostics = lint_source(
//!     Path::new("tutorial.md"),
//!     "{: .no_toc}\n",
//!     &registry,
//!     &RootedProbe::new("."),
//! )
//! .unwrap();
//!
//! let line = RdjsonFormatter::new().render(&diagnostics[0]).unwrap();
//! assert!(line.contains("\"GTN:001\""));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lint;

pub use error::{GtnLintError, Result};
