//! Box title rule.
//!
//! Boxes used to carry their title in a blockquote heading after an icon;
//! they now use a dedicated title tag named after the box.

use crate::lint::patterns::BOX_TITLE;
use crate::lint::{
    find_matching_texts, Code, Diagnostic, LintContext, LintRule, RuleId, Severity,
};

/// Rewrites heading-style box titles to the semantic title tag.
///
/// `> ### {% icon hands_on %} Hands-on: Upload` becomes
/// `> <hands-on-title>Upload</hands-on-title>`.
pub struct BoxTitleRule;

impl BoxTitleRule {
    fn tag_name(icon: &str) -> String {
        format!("{}-title", Self::box_label(icon))
    }

    fn box_label(icon: &str) -> String {
        icon.to_lowercase().replace('_', "-")
    }

    /// Title text without the box's own label (`Hands-on:` for `hands_on`).
    fn title_text<'a>(icon: &str, title: &'a str) -> &'a str {
        let title = title.trim();
        let label = Self::box_label(icon);
        match title.get(..label.len()) {
            Some(head) if head.eq_ignore_ascii_case(&label) => title[label.len()..]
                .strip_prefix(':')
                .map_or(title, str::trim_start),
            _ => title,
        }
    }
}

impl LintRule for BoxTitleRule {
    fn id(&self) -> RuleId {
        RuleId::new("box-title")
    }

    fn name(&self) -> &str {
        "Box Title"
    }

    fn description(&self) -> &str {
        "Replaces legacy heading box titles with title tags"
    }

    fn code(&self) -> Code {
        Code::new("GTN:009")
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        find_matching_texts(ctx.lines, &BOX_TITLE)
            .iter()
            .filter_map(|m| {
                let heading = m.group_span(1)?;
                let icon = m.group(2);
                let tag = Self::tag_name(icon);
                let title = Self::title_text(icon, m.group(3));
                Some(
                    self.diagnostic(
                        ctx,
                        &heading,
                        "This is the old box title syntax, please use the new title tag instead.",
                    )
                    .with_replacement(format!("<{tag}>{title}</{tag}>")),
                )
            })
            .collect()
    }

    fn supports_fix(&self) -> bool {
        true
    }
}
