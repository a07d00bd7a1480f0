//! Discouraged constructs with no safe automatic fix.
//!
//! - `{: .no_toc}` hides headings readers use to navigate
//! - YouTube iframes belong in the video library instead
//! - `target="_blank"` takes the choice of opening a tab away from readers

use crate::lint::patterns::{NEW_TAB_TARGET, NO_TOC, YOUTUBE_IFRAME};
use crate::lint::{
    find_matching_texts, Code, Diagnostic, LintContext, LintRule, RuleId, Severity,
};

/// Flags `{: .no_toc}` markers.
pub struct NoTocRule;

impl LintRule for NoTocRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-toc")
    }

    fn name(&self) -> &str {
        "No TOC Marker"
    }

    fn description(&self) -> &str {
        "Discourages hiding headings from the table of contents"
    }

    fn code(&self) -> Code {
        Code::new("GTN:001")
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        find_matching_texts(ctx.lines, &NO_TOC)
            .iter()
            .map(|m| {
                self.diagnostic(
                    ctx,
                    &m.span(),
                    "Setting {: .no_toc} is discouraged, these headings provide useful places for readers to jump to.",
                )
            })
            .collect()
    }
}

/// Flags embedded YouTube iframes.
pub struct YoutubeEmbedRule;

impl LintRule for YoutubeEmbedRule {
    fn id(&self) -> RuleId {
        RuleId::new("youtube-embed")
    }

    fn name(&self) -> &str {
        "YouTube Embed"
    }

    fn description(&self) -> &str {
        "Discourages embedding YouTube iframes in tutorials"
    }

    fn code(&self) -> Code {
        Code::new("GTN:002")
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        find_matching_texts(ctx.lines, &YOUTUBE_IFRAME)
            .iter()
            .map(|m| {
                self.diagnostic(
                    ctx,
                    &m.span(),
                    "Instead of embedding IFrames to YouTube contents, consider adding this video to the \
                     GTN Video Library where it will be more visible for others. \
                     https://github.com/gallantries/video-library/issues/",
                )
            })
            .collect()
    }
}

/// Flags links that force a new tab.
pub struct NewTabLinkRule;

impl LintRule for NewTabLinkRule {
    fn id(&self) -> RuleId {
        RuleId::new("new-tab-link")
    }

    fn name(&self) -> &str {
        "New Tab Link"
    }

    fn description(&self) -> &str {
        "Discourages links that open in a new tab"
    }

    fn code(&self) -> Code {
        Code::new("GTN:010")
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        find_matching_texts(ctx.lines, &NEW_TAB_TARGET)
            .iter()
            .map(|m| {
                self.diagnostic(
                    ctx,
                    &m.span(),
                    "Please do not open links in a new tab with target=\"_blank\". It is \
                     [bad for accessibility](https://www.w3.org/WAI/WCAG21/Techniques/general/G201); \
                     readers can choose to open a new tab themselves.",
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::test_support::{lines, run};
    use crate::lint::span::Position;

    #[test]
    fn no_toc_flags_marker_without_suggestion() {
        let lines = lines("## Heading\n{: .no_toc}\ntext");
        let diags = run(&NoTocRule, &lines);

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].range.start, Position::new(2, 1));
        assert_eq!(diags[0].range.end, Position::new(3, 1));
        assert_eq!(diags[0].code, Some(Code::new("GTN:001")));
        assert_eq!(diags[0].severity, Severity::Warning);
        assert!(diags[0].suggestion.is_none());
    }

    #[test]
    fn no_toc_ignores_other_attributes() {
        let lines = lines("{: .hide-when-printing}");
        assert!(run(&NoTocRule, &lines).is_empty());
    }

    #[test]
    fn youtube_flags_iframe() {
        let lines = lines(
            r#"intro
<iframe width="560" src="https://www.youtube.com/embed/abc"></iframe>"#,
        );
        let diags = run(&YoutubeEmbedRule, &lines);

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].range.start, Position::new(2, 1));
        assert_eq!(diags[0].code, Some(Code::new("GTN:002")));
        assert!(diags[0].suggestion.is_none());
    }

    #[test]
    fn youtube_ignores_plain_links() {
        let lines = lines("[video](https://www.youtube.com/watch?v=abc)");
        assert!(run(&YoutubeEmbedRule, &lines).is_empty());
    }

    #[test]
    fn new_tab_flags_each_line_once() {
        let lines = lines(
            "[a](x){:target=\"_blank\"} [b](y){:target=\"_blank\"}\nplain\n<a target='_blank'>",
        );
        let diags = run(&NewTabLinkRule, &lines);

        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].range.start, Position::new(1, 9));
        assert_eq!(diags[1].range.start.line, 3);
        assert!(diags.iter().all(|d| d.suggestion.is_none()));
        assert!(diags.iter().all(|d| d.code == Some(Code::new("GTN:010"))));
    }
}
