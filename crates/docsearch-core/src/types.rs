//! Domain types shared by the index, the engine and the HTTP surface.

use serde::{Deserialize, Serialize};

/// Position of a document in the order the generator emitted it.
pub type DocId = usize;

/// A document record exactly as shipped in the artifact, before validation.
///
/// `location` stays optional here so that a missing value can be reported as a
/// malformed index instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

impl RawDocument {
    pub fn new(location: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self { location: Some(location.into()), title: title.into(), text: text.into() }
    }
}

/// A validated, indexed page (or page section) of the site.
///
/// - `location`: unique path/URL, possibly with a `#fragment` for sections
/// - `title`: display title, markup removed
/// - `text`: plain-text content, markup removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub location: String,
    pub title: String,
    pub text: String,
}

impl Document {
    /// The page part of the location, i.e. everything before `#`.
    pub fn page(&self) -> &str {
        self.location.split_once('#').map_or(self.location.as_str(), |(page, _)| page)
    }

    /// The section anchor, when this document is a section of a larger page.
    pub fn section(&self) -> Option<&str> {
        self.location.split_once('#').map(|(_, anchor)| anchor).filter(|a| !a.is_empty())
    }
}

fn default_lang() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_separator() -> String {
    r"[\s\-]+".to_string()
}

fn default_pipeline() -> Vec<String> {
    vec!["stopWordFilter".to_string()]
}

/// Index configuration emitted by the site generator.
///
/// `separator` is a regular expression; `pipeline` names processing stages in
/// the order they run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    #[serde(default = "default_lang")]
    pub lang: Vec<String>,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_pipeline")]
    pub pipeline: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { lang: default_lang(), separator: default_separator(), pipeline: default_pipeline() }
    }
}

/// The whole serialized artifact: configuration plus documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndexArtifact {
    #[serde(default)]
    pub config: IndexConfig,
    pub docs: Vec<RawDocument>,
}

/// One ranked result as exposed over the wire.
///
/// `score` is the additive term-frequency score; higher is better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub location: String,
    pub title: String,
    pub snippet: String,
    pub score: u32,
}
