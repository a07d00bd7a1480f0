//! Training material linting.
//!
//! This module checks tutorial Markdown and BibTeX bibliographies through
//! a pluggable, ordered, rule-based system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Patterns** - Every regex a rule scans with ([`patterns`])
//! - **Rules** - Individual checks ([`LintRule`] trait)
//! - **Registry** - Ordered collection of rules ([`RuleRegistry`])
//! - **Diagnostics** - Findings with range, code and suggestion ([`Diagnostic`])
//! - **Engine** - Per-file driver ([`lint_source`], [`lint_file`])
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use gtnlint::lint::{lint_source, RootedProbe, RuleRegistry, Severity};
//!
//! let registry = RuleRegistry::with_builtins();
//! let probe = RootedProbe::new(".");
//! let diagnostics = lint_source(
//!     Path::new("tutorial.md"),
//!     "Read more [here](https://example.org).\n",
//!     &registry,
//!     &probe,
//! )
//! .unwrap();
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].code.unwrap().value(), "GTN:005");
//! assert_eq!(diagnostics[0].severity, Severity::Warning);
//! ```

pub mod bibliography;
pub mod diagnostic;
pub mod engine;
pub mod fix;
pub mod matcher;
pub mod output;
pub mod patterns;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod span;

pub use bibliography::{parse_bibliography, BibEntry};
pub use diagnostic::{Code, Diagnostic, Suggestion, CODE_URL};
pub use engine::{lint_file, lint_source, run_rules, split_lines};
pub use fix::{Fix, FixEngine, FixResult};
pub use matcher::{find_matching_texts, find_matching_texts_where, Match};
pub use output::{HumanFormatter, LintFormatter, OutputFormat, RdjsonFormatter};
pub use registry::RuleRegistry;
pub use rule::{FileKind, FileProbe, LintContext, LintRule, RootedProbe, RuleId, Severity};
pub use rules::{
    BibMissingFieldsRule, BoxTitleRule, DoiCitationRule, ExternalGtnLinkRule, JekyllBracesRule,
    LinkTextRule, MissingSnippetRule, NewTabLinkRule, NoTocRule, ToolUrlRule, YoutubeEmbedRule,
};
pub use span::{Position, Range, Span};
