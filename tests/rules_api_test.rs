//! Rule engine integration tests through the public API.

use std::path::Path;

use gtnlint::lint::{
    find_matching_texts, lint_source, split_lines, Diagnostic, FileProbe, FixEngine, LintContext,
    LintRule, Position, RuleId, RuleRegistry, Severity,
};

struct NoFiles;

impl FileProbe for NoFiles {
    fn exists(&self, _relative: &str) -> bool {
        false
    }
}

fn lint(path: &str, source: &str) -> Vec<Diagnostic> {
    lint_source(Path::new(path), source, &RuleRegistry::with_builtins(), &NoFiles).unwrap()
}

const KITCHEN_SINK: &str = r#"# Tutorial
{: .no_toc}
<iframe src="https://www.youtube.com/embed/abc"></iframe>
See [slides](https://training.galaxyproject.org/training-material/topics/x/slides.html) too.
See [this](https://training.galaxyproject.org/training-material/topics/x/tutorial.html) too.
A paper [ref](https://doi.org/10.1234/abcd) and data [z](https://doi.org/10.5281/zenodo.1).
Click [here](https://example.org) now.
Broken % icon tip %} call.
{% snippet faqs/galaxy/missing.md %}
{% tool [Cut](https://usegalaxy.eu/?tool_id=Cut1&version=1.0.2) %}
> ### {% icon hands_on %} Hands-on: Do it
[x](y){:target="_blank"}
"#;

#[test]
fn every_markup_rule_fires_in_order() {
    let diags = lint("tutorial.md", KITCHEN_SINK);
    let codes: Vec<_> = diags.iter().map(|d| d.code.unwrap().value()).collect();

    assert_eq!(
        codes,
        vec![
            "GTN:001", "GTN:002", "GTN:003", "GTN:003", "GTN:004", "GTN:005", "GTN:006",
            "GTN:007", "GTN:008", "GTN:009", "GTN:010",
        ]
    );
}

#[test]
fn suggestion_range_always_equals_diagnostic_range() {
    for diag in lint("tutorial.md", KITCHEN_SINK) {
        if let Some(suggestion) = &diag.suggestion {
            assert_eq!(suggestion.range, diag.range, "{}", diag.message);
        }
    }
}

#[test]
fn end_of_line_matches_roll_over() {
    let source = "line one\nends with [here]\n";
    let diags = lint("t.md", source);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].range.start, Position::new(2, 11));
    assert_eq!(diags[0].range.end, Position::new(3, 1));
}

#[test]
fn non_matching_lines_produce_nothing() {
    let source = "plain\n\nmore plain text with {{ variables }} and [a guide](x)\n";
    assert!(lint("t.md", source).is_empty());
}

#[test]
fn tutorial_and_slides_rewrites() {
    let diags = lint("t.md", KITCHEN_SINK);
    let texts: Vec<_> = diags
        .iter()
        .filter(|d| d.code.unwrap().value() == "GTN:003")
        .map(|d| d.suggestion.as_ref().unwrap().text.as_str())
        .collect();

    assert_eq!(
        texts,
        vec!["{% link topics/x/slides.html %}", "{% link topics/x/tutorial.md %}"]
    );
}

#[test]
fn bibliography_entry_missing_everything() {
    let source = "@book{Key,\n  author = {A}\n}\n";
    let diags = lint("refs.bib", source);

    assert_eq!(diags.len(), 2);
    assert!(diags
        .iter()
        .all(|d| d.range.start == Position::new(1, 1) && d.severity == Severity::Error));
}

#[test]
fn fixing_everything_fixable_then_relinting() {
    let diags = lint("t.md", KITCHEN_SINK);
    let engine = FixEngine::new();
    let (fixes, invalid) = engine.fixes_for(KITCHEN_SINK, &diags);
    let (fixed, result) = engine.apply(KITCHEN_SINK, &fixes);

    assert_eq!(invalid, 0);
    assert_eq!(result.skipped, 0);
    assert_eq!(result.applied, fixes.len());
    assert_eq!(split_lines(&fixed).len(), split_lines(KITCHEN_SINK).len());

    let remaining: Vec<_> = lint("t.md", &fixed)
        .into_iter()
        .filter(|d| d.suggestion.is_some())
        .map(|d| d.code.unwrap().value())
        .collect();
    assert!(remaining.is_empty(), "{:?}", remaining);
}

#[test]
fn custom_rules_plug_into_the_registry() {
    struct TodoRule;

    impl LintRule for TodoRule {
        fn id(&self) -> RuleId {
            RuleId::new("todo")
        }
        fn name(&self) -> &str {
            "Todo"
        }
        fn description(&self) -> &str {
            "Flags TODO markers"
        }
        fn code(&self) -> gtnlint::lint::Code {
            gtnlint::lint::Code::new("LOCAL:001")
        }
        fn default_severity(&self) -> Severity {
            Severity::Warning
        }
        fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
            let pattern = regex::Regex::new("TODO").unwrap();
            find_matching_texts(ctx.lines, &pattern)
                .iter()
                .map(|m| self.diagnostic(ctx, &m.span(), "Resolve this"))
                .collect()
        }
    }

    let mut registry = RuleRegistry::new();
    registry.register(Box::new(TodoRule));
    let diags = lint_source(Path::new("a.md"), "x\nTODO: y\n", &registry, &NoFiles).unwrap();

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].range.start, Position::new(2, 1));
    assert_eq!(diags[0].code.unwrap().url().rsplit('#').next(), Some("local001"));
}
