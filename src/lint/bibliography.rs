//! Bibliography entries as seen by the lint rules.
//!
//! Parsing is delegated to `biblatex`. Each entry is reduced to the fields
//! the rules care about, with every field that is absent, empty, or fails to
//! resolve represented as `None`. Files that parse but do not resolve
//! (undefined `@string` abbreviations, for instance) are read as written.

use biblatex::{Bibliography, ChunksExt, Pair, RawBibliography, RawChunk};
use tracing::debug;

/// A bibliography entry reduced to its key and optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BibEntry {
    /// Citation key.
    pub key: String,
    /// DOI, if set.
    pub doi: Option<String>,
    /// URL, if set.
    pub url: Option<String>,
    /// Title, if set.
    pub title: Option<String>,
}

impl BibEntry {
    /// Create an entry with no optional fields.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Set the DOI.
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    /// Set the URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

fn present(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Parse BibTeX source into entries, in source order.
///
/// Returns the parser's message when the source is not syntactically valid.
pub fn parse_bibliography(source: &str) -> std::result::Result<Vec<BibEntry>, String> {
    let raw = RawBibliography::parse(source).map_err(|e| e.to_string())?;

    match Bibliography::from_raw(raw.clone()) {
        Ok(bibliography) => Ok(bibliography
            .iter()
            .map(|entry| BibEntry {
                key: entry.key.clone(),
                doi: entry.doi().ok().and_then(present),
                url: entry.url().ok().and_then(present),
                title: entry
                    .title()
                    .ok()
                    .map(|chunks| chunks.format_verbatim())
                    .and_then(present),
            })
            .collect()),
        Err(e) => {
            debug!("Reading bibliography without resolving it: {}", e);
            Ok(raw_entries(&raw))
        }
    }
}

/// Entries as written, without resolving abbreviations or cross references.
fn raw_entries(raw: &RawBibliography<'_>) -> Vec<BibEntry> {
    raw.entries
        .iter()
        .map(|entry| {
            let fields = &entry.v.fields;
            BibEntry {
                key: entry.v.key.v.to_string(),
                doi: raw_field(fields, "doi"),
                url: raw_field(fields, "url"),
                title: raw_field(fields, "title"),
            }
        })
        .collect()
}

/// Field text with abbreviations left as their names.
fn raw_field(fields: &[Pair<'_>], name: &str) -> Option<String> {
    let pair = fields.iter().find(|p| p.key.v.eq_ignore_ascii_case(name))?;
    let text: String = pair
        .value
        .v
        .iter()
        .map(|chunk| match chunk.v {
            RawChunk::Normal(s) | RawChunk::Abbreviation(s) => s,
        })
        .collect();
    present(text)
}
