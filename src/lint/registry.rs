//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores the available lint rules in registration
//! order, which is also the order their diagnostics are reported in.

use super::rule::{FileKind, LintRule, RuleId};
use super::rules::{
    BibMissingFieldsRule, BoxTitleRule, DoiCitationRule, ExternalGtnLinkRule, JekyllBracesRule,
    LinkTextRule, MissingSnippetRule, NewTabLinkRule, NoTocRule, ToolUrlRule, YoutubeEmbedRule,
};

/// Ordered registry of lint rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules, in reporting order.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(NoTocRule));
        registry.register(Box::new(YoutubeEmbedRule));
        registry.register(Box::new(ExternalGtnLinkRule::slides()));
        registry.register(Box::new(ExternalGtnLinkRule::tutorial()));
        registry.register(Box::new(DoiCitationRule));
        registry.register(Box::new(LinkTextRule));
        registry.register(Box::new(JekyllBracesRule));
        registry.register(Box::new(MissingSnippetRule));
        registry.register(Box::new(ToolUrlRule));
        registry.register(Box::new(BoxTitleRule));
        registry.register(Box::new(NewTabLinkRule));
        registry.register(Box::new(BibMissingFieldsRule));
        registry
    }

    /// Register a lint rule.
    ///
    /// A rule with the same id replaces the earlier one in place.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        let id = rule.id();
        match self.rules.iter().position(|r| r.id() == id) {
            Some(idx) => self.rules[idx] = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.iter().find(|r| &r.id() == id).map(|r| r.as_ref())
    }

    /// Iterate over all rules in order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Iterate over the rules that apply to `kind`, in order.
    pub fn for_kind(&self, kind: FileKind) -> impl Iterator<Item = &dyn LintRule> {
        self.iter().filter(move |r| r.file_kind() == kind)
    }

    /// Remove every rule whose id or code is listed.
    ///
    /// Returns the entries that matched nothing.
    pub fn disable<S: AsRef<str>>(&mut self, ids_or_codes: &[S]) -> Vec<String> {
        let mut unknown = Vec::new();
        for wanted in ids_or_codes {
            let wanted = wanted.as_ref();
            let before = self.rules.len();
            self.rules
                .retain(|r| r.id().0 != wanted && !r.code().value().eq_ignore_ascii_case(wanted));
            if self.rules.len() == before {
                unknown.push(wanted.to_string());
            }
        }
        unknown
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{Code, Diagnostic, LintContext, Severity};

    struct MockRule {
        id: RuleId,
        description: &'static str,
    }

    impl MockRule {
        fn new(id: &str) -> Self {
            Self {
                id: RuleId::new(id),
                description: "A mock rule for testing",
            }
        }
    }

    impl LintRule for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn name(&self) -> &str {
            "Mock Rule"
        }
        fn description(&self) -> &str {
            self.description
        }
        fn code(&self) -> Code {
            Code::new("GTN:999")
        }
        fn default_severity(&self) -> Severity {
            Severity::Warning
        }
        fn check(&self, _ctx: &LintContext<'_>) -> Vec<Diagnostic> {
            vec![]
        }
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule::new("mock")));

        assert!(!registry.is_empty());
        assert!(registry.get(&RuleId::new("mock")).is_some());
        assert!(registry.get(&RuleId::new("unknown")).is_none());
    }

    #[test]
    fn registry_keeps_registration_order() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule::new("b")));
        registry.register(Box::new(MockRule::new("a")));
        registry.register(Box::new(MockRule::new("c")));

        let ids: Vec<_> = registry.iter().map(|r| r.id().0).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn registering_same_id_replaces_in_place() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule::new("a")));
        registry.register(Box::new(MockRule::new("b")));
        registry.register(Box::new(MockRule {
            id: RuleId::new("a"),
            description: "replacement",
        }));

        assert_eq!(registry.len(), 2);
        let first = registry.iter().next().unwrap();
        assert_eq!(first.description(), "replacement");
    }

    #[test]
    fn registry_default_is_empty() {
        let registry = RuleRegistry::default();
        assert!(registry.is_empty());
    }

    #[test]
    fn builtins_are_in_reporting_order() {
        let registry = RuleRegistry::with_builtins();
        let ids: Vec<_> = registry.iter().map(|r| r.id().0).collect();

        assert_eq!(
            ids,
            vec![
                "no-toc",
                "youtube-embed",
                "external-slides-link",
                "external-tutorial-link",
                "doi-citation",
                "link-text",
                "jekyll-braces",
                "missing-snippet",
                "tool-url",
                "box-title",
                "new-tab-link",
                "bib-missing-fields",
            ]
        );
    }

    #[test]
    fn for_kind_splits_markup_and_bibliography() {
        let registry = RuleRegistry::with_builtins();

        assert_eq!(registry.for_kind(FileKind::Markup).count(), 11);
        let bib: Vec<_> = registry
            .for_kind(FileKind::Bibliography)
            .map(|r| r.id().0)
            .collect();
        assert_eq!(bib, vec!["bib-missing-fields"]);
        assert_eq!(registry.for_kind(FileKind::Unsupported).count(), 0);
    }

    #[test]
    fn disable_by_id_and_code() {
        let mut registry = RuleRegistry::with_builtins();
        let unknown = registry.disable(&["no-toc", "gtn:003", "nonsense"]);

        assert_eq!(unknown, vec!["nonsense"]);
        assert_eq!(registry.len(), 9);
        assert!(registry.get(&RuleId::new("no-toc")).is_none());
        assert!(registry.get(&RuleId::new("external-slides-link")).is_none());
        assert!(registry.get(&RuleId::new("external-tutorial-link")).is_none());
    }
}
