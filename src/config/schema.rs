//! Configuration schema.

use std::path::PathBuf;

use serde::Deserialize;

use crate::lint::OutputFormat;

/// Contents of `.gtnlint.yml`.
///
/// Every field is optional; an empty file is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Rule ids or codes (`no-toc`, `GTN:003`) to turn off.
    pub disable: Vec<String>,

    /// Directory snippet references are resolved against, relative to the
    /// project root.
    pub snippet_root: Option<PathBuf>,

    /// Output format used when none is given on the command line.
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config: LintConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let yaml = r#"
disable:
  - no-toc
  - GTN:003
snippet_root: site
format: human
"#;
        let config: LintConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.disable, vec!["no-toc", "GTN:003"]);
        assert_eq!(config.snippet_root, Some(PathBuf::from("site")));
        assert_eq!(config.format, Some(OutputFormat::Human));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(serde_yaml::from_str::<LintConfig>("disabled: [no-toc]").is_err());
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(serde_yaml::from_str::<LintConfig>("format: sarif").is_err());
    }
}
