//! Rules command implementation.
//!
//! The `gtnlint rules` command lists the rule catalogue in reporting order.

use std::io::Write;

use crate::cli::args::RulesArgs;
use crate::config::LintConfig;
use crate::error::Result;
use crate::lint::{FileKind, LintRule, RuleRegistry};

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
pub struct RulesCommand {
    config: LintConfig,
    args: RulesArgs,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new(config: LintConfig, args: RulesArgs) -> Self {
        Self { config, args }
    }

    fn is_disabled(&self, rule: &dyn LintRule) -> bool {
        let id = rule.id();
        self.config
            .disable
            .iter()
            .any(|d| *d == id.0 || rule.code().value().eq_ignore_ascii_case(d))
    }
}

fn kind_label(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Markup => "md",
        FileKind::Bibliography => "bib",
        FileKind::Unsupported => "-",
    }
}

impl Command for RulesCommand {
    fn execute(&self, out: &mut dyn Write, _err: &mut dyn Write) -> Result<CommandResult> {
        let registry = RuleRegistry::with_builtins();

        for rule in registry.iter() {
            let mut flags = Vec::new();
            if rule.supports_fix() {
                flags.push("fix");
            }
            if self.is_disabled(rule) {
                flags.push("disabled");
            }

            writeln!(
                out,
                "{:<24} {:<8} {:<8} {:<4} {}",
                rule.id().0,
                rule.code().value(),
                rule.default_severity().to_string(),
                kind_label(rule.file_kind()),
                flags.join(",")
            )?;
            if self.args.long {
                writeln!(out, "    {}: {}", rule.name(), rule.description())?;
                writeln!(out, "    {}", rule.code().url())?;
            }
        }

        Ok(CommandResult::success())
    }
}
