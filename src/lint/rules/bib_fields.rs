//! Mandatory bibliography fields.

use crate::lint::bibliography::BibEntry;
use crate::lint::patterns::bib_entry_header;
use crate::lint::rule::FileKind;
use crate::lint::{Code, Diagnostic, LintContext, LintRule, RuleId, Severity, Span};

/// A mandatory field an entry lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    /// Neither `doi` nor `url` is set.
    DoiAndUrl,
    /// `title` is not set.
    Title,
}

impl MissingField {
    /// Message reported for this reason.
    pub fn message(&self) -> &'static str {
        match self {
            MissingField::DoiAndUrl => "Missing both a DOI and a URL. Please add one of the two.",
            MissingField::Title => "This entry is missing a title attribute. Please add it.",
        }
    }
}

/// Every `(key, reason)` pair, in entry order, DOI/URL before title.
pub fn missing_mandatory_fields(entries: &[BibEntry]) -> Vec<(&str, MissingField)> {
    let mut missing = Vec::new();
    for entry in entries {
        if entry.doi.is_none() && entry.url.is_none() {
            missing.push((entry.key.as_str(), MissingField::DoiAndUrl));
        }
        if entry.title.is_none() {
            missing.push((entry.key.as_str(), MissingField::Title));
        }
    }
    missing
}

/// Flags bibliography entries without a DOI or URL, or without a title.
pub struct BibMissingFieldsRule;

impl LintRule for BibMissingFieldsRule {
    fn id(&self) -> RuleId {
        RuleId::new("bib-missing-fields")
    }

    fn name(&self) -> &str {
        "Bibliography Missing Fields"
    }

    fn description(&self) -> &str {
        "Requires a title and a DOI or URL on every bibliography entry"
    }

    fn code(&self) -> Code {
        Code::new("GTN:011")
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn file_kind(&self) -> FileKind {
        FileKind::Bibliography
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (key, reason) in missing_mandatory_fields(ctx.bibliography) {
            let Some(header) = bib_entry_header(key) else {
                continue;
            };
            for (idx, line) in ctx.lines.iter().enumerate() {
                if header.is_match(line) {
                    let span = Span::whole_line(idx, line);
                    diagnostics.push(self.diagnostic(ctx, &span, reason.message()));
                }
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::test_support::{lines, run_bib};
    use crate::lint::span::Position;

    #[test]
    fn complete_entry_has_no_findings() {
        let entries = vec![BibEntry::new("A").with_doi("10.1/x").with_title("t")];
        assert!(missing_mandatory_fields(&entries).is_empty());
    }

    #[test]
    fn url_alone_is_enough() {
        let entries = vec![BibEntry::new("A").with_url("https://x").with_title("t")];
        assert!(missing_mandatory_fields(&entries).is_empty());
    }

    #[test]
    fn reasons_in_entry_order() {
        let entries = vec![
            BibEntry::new("A").with_title("t"),
            BibEntry::new("B").with_doi("10.1/x"),
            BibEntry::new("C"),
        ];

        assert_eq!(
            missing_mandatory_fields(&entries),
            vec![
                ("A", MissingField::DoiAndUrl),
                ("B", MissingField::Title),
                ("C", MissingField::DoiAndUrl),
                ("C", MissingField::Title),
            ]
        );
    }

    #[test]
    fn entry_missing_everything_flags_header_twice() {
        let lines = lines("% refs\n@misc{Bare2021,\n  author = {Doe, Jane}\n}");
        let entries = vec![BibEntry::new("Bare2021")];
        let diags = run_bib(&BibMissingFieldsRule, &lines, &entries);

        assert_eq!(diags.len(), 2);
        for d in &diags {
            assert_eq!(d.severity, Severity::Error);
            assert_eq!(d.code, Some(Code::new("GTN:011")));
            assert_eq!(d.range.start, Position::new(2, 1));
            assert_eq!(d.range.end, Position::new(3, 1));
            assert!(d.suggestion.is_none());
        }
        assert_eq!(diags[0].message, MissingField::DoiAndUrl.message());
        assert_eq!(diags[1].message, MissingField::Title.message());
    }

    #[test]
    fn header_must_match_key_exactly() {
        let lines = lines("@misc{Key2,\n}\n@misc{Key,\n}");
        let entries = vec![BibEntry::new("Key").with_url("u")];
        let diags = run_bib(&BibMissingFieldsRule, &lines, &entries);

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].range.start.line, 3);
    }

    #[test]
    fn applies_to_bibliographies() {
        assert_eq!(BibMissingFieldsRule.file_kind(), FileKind::Bibliography);
    }
}
