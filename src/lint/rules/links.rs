//! Link hygiene rules.
//!
//! Absolute links to the public training site rot and bypass the internal
//! link checker, DOI links should be citations, and link text must say
//! where the link goes.

use crate::lint::patterns::{
    BAD_LINK_TEXT, DOI_LINK, EXTERNAL_SLIDES_LINK, EXTERNAL_TUTORIAL_LINK,
};
use crate::lint::{
    find_matching_texts, find_matching_texts_where, Code, Diagnostic, LintContext, LintRule, RuleId, Severity,
};

/// DOIs under this prefix are archived datasets, not citable papers.
const ZENODO_DOI_PREFIX: &str = "10.5281/zenodo";

/// Which kind of training page an external link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// `.../tutorial.html`, linked as `tutorial.md`.
    Tutorial,
    /// `.../slides.html`, linked as-is.
    Slides,
}

/// Rewrites absolute links to the training site into `{% link %}` calls.
pub struct ExternalGtnLinkRule {
    kind: PageKind,
}

impl ExternalGtnLinkRule {
    /// Create the rule for one page kind.
    pub fn new(kind: PageKind) -> Self {
        Self { kind }
    }

    /// Rule for tutorial pages.
    pub fn tutorial() -> Self {
        Self::new(PageKind::Tutorial)
    }

    /// Rule for slide decks.
    pub fn slides() -> Self {
        Self::new(PageKind::Slides)
    }

    fn replacement(&self, page: &str) -> String {
        match self.kind {
            PageKind::Tutorial => format!("{{% link {}.md %}}", page),
            PageKind::Slides => format!("{{% link {} %}}", page),
        }
    }
}

impl LintRule for ExternalGtnLinkRule {
    fn id(&self) -> RuleId {
        match self.kind {
            PageKind::Tutorial => RuleId::new("external-tutorial-link"),
            PageKind::Slides => RuleId::new("external-slides-link"),
        }
    }

    fn name(&self) -> &str {
        match self.kind {
            PageKind::Tutorial => "External Tutorial Link",
            PageKind::Slides => "External Slides Link",
        }
    }

    fn description(&self) -> &str {
        match self.kind {
            PageKind::Tutorial => "Replaces absolute tutorial URLs with internal links",
            PageKind::Slides => "Replaces absolute slide deck URLs with internal links",
        }
    }

    fn code(&self) -> Code {
        Code::new("GTN:003")
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        let pattern = match self.kind {
            PageKind::Tutorial => &EXTERNAL_TUTORIAL_LINK,
            PageKind::Slides => &EXTERNAL_SLIDES_LINK,
        };

        find_matching_texts(ctx.lines, pattern)
            .iter()
            .filter_map(|m| {
                let url = m.group_span(1)?;
                Some(
                    self.diagnostic(ctx, &url, "Don't link to the external version of the GTN")
                        .with_replacement(self.replacement(m.group(2))),
                )
            })
            .collect()
    }

    fn supports_fix(&self) -> bool {
        true
    }
}

/// Suggests citations instead of raw DOI links.
pub struct DoiCitationRule;

impl LintRule for DoiCitationRule {
    fn id(&self) -> RuleId {
        RuleId::new("doi-citation")
    }

    fn name(&self) -> &str {
        "DOI Citation"
    }

    fn description(&self) -> &str {
        "Suggests the citation mechanism instead of linking to DOIs"
    }

    fn code(&self) -> Code {
        Code::new("GTN:004")
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        let cited = find_matching_texts_where(ctx.lines, &DOI_LINK, |c| {
            !c[2].starts_with(ZENODO_DOI_PREFIX)
        });
        cited
            .iter()
            .map(|m| {
                self.diagnostic(
                    ctx,
                    &m.span(),
                    "This looks like a DOI which could be better served by using the built-in \
                     Citations mechanism. You can use https://doi2bib.org to convert your DOI into \
                     a .bib formatted entry, and add to your tutorial.md",
                )
                .with_replacement("]({% cite ... %})")
            })
            .collect()
    }

    fn supports_fix(&self) -> bool {
        true
    }
}

/// Flags non-descriptive link text such as `[here]`.
pub struct LinkTextRule;

impl LintRule for LinkTextRule {
    fn id(&self) -> RuleId {
        RuleId::new("link-text")
    }

    fn name(&self) -> &str {
        "Link Text"
    }

    fn description(&self) -> &str {
        "Requires descriptive link text instead of 'here' or 'link'"
    }

    fn code(&self) -> Code {
        Code::new("GTN:005")
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        find_matching_texts(ctx.lines, &BAD_LINK_TEXT)
            .iter()
            .map(|m| {
                self.diagnostic(
                    ctx,
                    &m.span(),
                    "Do not use 'here' or 'link' as your link title, it is \
                     [bad for accessibility](https://usability.yale.edu/web-accessibility/articles/links#link-text). \
                     Instead try restructuring your sentence to have useful descriptive text in the link.",
                )
                .with_replacement("[Something better here]")
            })
            .collect()
    }

    fn supports_fix(&self) -> bool {
        true
    }
}
