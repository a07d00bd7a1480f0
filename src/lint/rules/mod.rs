//! Built-in lint rules.
//!
//! This module contains all the built-in rules that come with gtnlint,
//! grouped by what they look at.

pub mod bib_fields;
pub mod boxes;
pub mod discouraged;
pub mod jekyll;
pub mod links;

pub use bib_fields::{missing_mandatory_fields, BibMissingFieldsRule, MissingField};
pub use boxes::BoxTitleRule;
pub use discouraged::{NewTabLinkRule, NoTocRule, YoutubeEmbedRule};
pub use jekyll::{JekyllBracesRule, MissingSnippetRule, ToolUrlRule};
pub use links::{DoiCitationRule, ExternalGtnLinkRule, LinkTextRule, PageKind};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::lint::bibliography::BibEntry;
    use crate::lint::rule::FileProbe;
    use crate::lint::{Diagnostic, LintContext, LintRule};

    /// Probe that knows a fixed set of paths.
    pub struct StaticProbe(pub Vec<&'static str>);

    impl FileProbe for StaticProbe {
        fn exists(&self, relative: &str) -> bool {
            self.0.iter().any(|known| *known == relative)
        }
    }

    pub fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_owned).collect()
    }

    pub fn run(rule: &dyn LintRule, lines: &[String]) -> Vec<Diagnostic> {
        run_with_probe(rule, lines, &StaticProbe(Vec::new()))
    }

    pub fn run_with_probe(
        rule: &dyn LintRule,
        lines: &[String],
        probe: &dyn FileProbe,
    ) -> Vec<Diagnostic> {
        rule.check(&LintContext {
            path: "test.md",
            lines,
            bibliography: &[],
            probe,
        })
    }

    pub fn run_bib(rule: &dyn LintRule, lines: &[String], entries: &[BibEntry]) -> Vec<Diagnostic> {
        rule.check(&LintContext {
            path: "test.bib",
            lines,
            bibliography: entries,
            probe: &StaticProbe(Vec::new()),
        })
    }
}
