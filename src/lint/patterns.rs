//! Rule patterns.
//!
//! Every pattern a rule scans with lives here, compiled once, so each can
//! be tested on its own without going through rule dispatch.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        pub static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($pattern).expect(concat!(stringify!($name), " must compile")));
    };
}

lazy_regex!(NO_TOC, r"\{:\s*\.no_toc\s*\}");

lazy_regex!(YOUTUBE_IFRAME, r"<iframe.*youtube");

lazy_regex!(NEW_TAB_TARGET, r#"target\s*=\s*["']?_blank["']?"#);

// Group 1: the URL inside the parentheses. Group 2: page path without `.html`.
lazy_regex!(
    EXTERNAL_TUTORIAL_LINK,
    r"\((https?://(?:training\.galaxyproject\.org|galaxyproject\.github\.io)/training-material/([^()\s]*tutorial)\.html)\)"
);

// Group 1: the URL inside the parentheses. Group 2: page path with `.html`.
lazy_regex!(
    EXTERNAL_SLIDES_LINK,
    r"\((https?://(?:training\.galaxyproject\.org|galaxyproject\.github\.io)/training-material/([^()\s]*slides\.html))\)"
);

// Group 1: resolver URL. Group 2: the DOI itself.
lazy_regex!(
    DOI_LINK,
    r"\]\((https?://(?:dx\.)?doi\.org/(10\.[^)\s]+))\)"
);

lazy_regex!(BAD_LINK_TEXT, r"(?i)\[\s*(?:here|link)\s*\]");

// `% ... %}` not preceded by `{`. Group 1: the call text.
lazy_regex!(JEKYLL_MISSING_OPEN_BRACE, r"(?:[^{]|^)(%\s*[^%]*%\})");

// `{ ... %}` where `{` is not followed by `%`. Group 1: text after `{`.
lazy_regex!(JEKYLL_MISSING_OPEN_PERCENT, r"\{([^%]\s*[^%]* %\})");

// `{% ... %` not followed by `}`. Group 2: the character after `%`, or empty at end of line.
lazy_regex!(JEKYLL_MISSING_CLOSE_BRACE, r"(\{%\s*[^%]*%)([^}]|$)");

// `{% ... }` without `%` before `}`. Group 1: the call text up to `}`.
lazy_regex!(JEKYLL_MISSING_CLOSE_PERCENT, r"(\{%\s*[^}]*[^%])\}");

// Group 1: referenced snippet path.
lazy_regex!(SNIPPET, r"(?i)\{%\s*snippet\s+([^\s%]+)");

// Group 1: bracketed display name. Group 2: tool_id value.
lazy_regex!(
    TOOL_URL,
    r"(?i)\{%\s*tool\s+(\[[^\]]*\])\(https?://[^)]*?tool_id=([^)&\s]*)[^)]*\)\s*%\}"
);

// Blockquote heading at line start. Group 1: heading to replace.
// Group 2: icon identifier. Group 3: title text, box label included.
lazy_regex!(
    BOX_TITLE,
    r"^(?:\s*>)+\s*(#{1,6}\s*\{%\s*icon\s+([^%\s]+)\s*%\}\s*(.*))"
);

/// Pattern for the header line of the bibliography entry `key`.
///
/// Returns `None` only if the escaped pattern cannot be built, which the
/// caller treats as "no match".
pub fn bib_entry_header(key: &str) -> Option<Regex> {
    Regex::new(&format!(r"^\s*@.*\{{{},", regex::escape(key))).ok()
}
