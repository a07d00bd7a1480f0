//! Templating (`{% ... %}`) call rules.

use crate::lint::patterns::{
    JEKYLL_MISSING_CLOSE_BRACE, JEKYLL_MISSING_CLOSE_PERCENT, JEKYLL_MISSING_OPEN_BRACE,
    JEKYLL_MISSING_OPEN_PERCENT, SNIPPET, TOOL_URL,
};
use crate::lint::{
    find_matching_texts, Code, Diagnostic, LintContext, LintRule, RuleId, Severity, Span,
};

/// Detects templating calls with a missing delimiter.
///
/// Four independent heuristics run over the original lines, in order:
/// missing `{`, missing opening `%`, missing `}`, missing closing `%`.
/// A line can be flagged by several of them.
pub struct JekyllBracesRule;

impl JekyllBracesRule {
    fn missing_open_brace(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        find_matching_texts(ctx.lines, &JEKYLL_MISSING_OPEN_BRACE)
            .iter()
            .filter_map(|m| {
                let call = m.group_span(1)?;
                Some(
                    self.diagnostic(
                        ctx,
                        &call,
                        "It looks like you might be missing the opening { of a jekyll function",
                    )
                    .with_replacement(format!("{{{}", call.text())),
                )
            })
            .collect()
    }

    fn missing_open_percent(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        find_matching_texts(ctx.lines, &JEKYLL_MISSING_OPEN_PERCENT)
            .iter()
            .filter_map(|m| {
                let rest = m.group_span(1)?;
                Some(
                    self.diagnostic(
                        ctx,
                        &rest,
                        "It looks like you might be missing the opening % of a jekyll function",
                    )
                    .with_replacement(format!("%{}", rest.text())),
                )
            })
            .collect()
    }

    fn missing_close_brace(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        find_matching_texts(ctx.lines, &JEKYLL_MISSING_CLOSE_BRACE)
            .iter()
            .filter_map(|m| {
                let after = m.group_span(2)?;
                Some(
                    self.diagnostic(
                        ctx,
                        &after,
                        "It looks like you might be missing the closing } of a jekyll function",
                    )
                    .with_replacement(format!("}}{}", after.text())),
                )
            })
            .collect()
    }

    fn missing_close_percent(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        find_matching_texts(ctx.lines, &JEKYLL_MISSING_CLOSE_PERCENT)
            .iter()
            .filter_map(|m| {
                let call = m.group_span(1)?;
                let whole = m.span();
                Some(
                    self.diagnostic(
                        ctx,
                        &whole,
                        "It looks like you might be missing the closing % of a jekyll function",
                    )
                    .with_replacement(format!("{}%}}", call.text())),
                )
            })
            .collect()
    }
}

impl LintRule for JekyllBracesRule {
    fn id(&self) -> RuleId {
        RuleId::new("jekyll-braces")
    }

    fn name(&self) -> &str {
        "Jekyll Braces"
    }

    fn description(&self) -> &str {
        "Detects templating calls with a missing { or % delimiter"
    }

    fn code(&self) -> Code {
        Code::new("GTN:006")
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = self.missing_open_brace(ctx);
        diagnostics.extend(self.missing_open_percent(ctx));
        diagnostics.extend(self.missing_close_brace(ctx));
        diagnostics.extend(self.missing_close_percent(ctx));
        diagnostics
    }

    fn supports_fix(&self) -> bool {
        true
    }
}

/// Flags `{% snippet %}` calls whose target file does not exist.
pub struct MissingSnippetRule;

impl LintRule for MissingSnippetRule {
    fn id(&self) -> RuleId {
        RuleId::new("missing-snippet")
    }

    fn name(&self) -> &str {
        "Missing Snippet"
    }

    fn description(&self) -> &str {
        "Checks that referenced snippets exist"
    }

    fn code(&self) -> Code {
        Code::new("GTN:007")
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        find_matching_texts(ctx.lines, &SNIPPET)
            .iter()
            .filter(|m| !ctx.probe.exists(m.group(1)))
            .map(|m| {
                self.diagnostic(
                    ctx,
                    &m.span(),
                    format!("This snippet ({}) does not seem to exist", m.group(1)),
                )
            })
            .collect()
    }
}

/// Rewrites tool links that embed a full server URL to the bare tool id.
pub struct ToolUrlRule;

impl ToolUrlRule {
    fn tool_id(raw: &str) -> String {
        raw.replace("%2F", "/").replace("%2f", "/")
    }
}

impl LintRule for ToolUrlRule {
    fn id(&self) -> RuleId {
        RuleId::new("tool-url")
    }

    fn name(&self) -> &str {
        "Tool URL"
    }

    fn description(&self) -> &str {
        "Requires tool links to use the tool id instead of a server URL"
    }

    fn code(&self) -> Code {
        Code::new("GTN:008")
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        find_matching_texts(ctx.lines, &TOOL_URL)
            .iter()
            .map(|m| {
                let span: Span<'_> = m.span();
                self.diagnostic(
                    ctx,
                    &span,
                    "You have used the full tool URL to a specific server, here we only need the tool ID portion.",
                )
                .with_replacement(format!(
                    "{{% tool {}({}) %}}",
                    m.group(1),
                    Self::tool_id(m.group(2))
                ))
            })
            .collect()
    }

    fn supports_fix(&self) -> bool {
        true
    }
}
