use docsearch_core::config::SearchSettings;
use docsearch_core::traits::Searcher;
use docsearch_core::types::{DocId, Document, SearchHit, SearchIndexArtifact};
use docsearch_core::Result;

use crate::index::{IndexOptions, SiteIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
	/// Let a query token also match every indexed term it is a prefix of.
	pub prefix_match: bool,
	/// Snippet width in characters; 0 disables snippets.
	pub snippet_chars: usize,
}

impl Default for SearchOptions {
	fn default() -> Self {
		Self { prefix_match: true, snippet_chars: 160 }
	}
}

/// A ranked document borrowed from the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredDocument<'a> {
	pub id: DocId,
	pub document: &'a Document,
	pub score: u32,
}

pub struct SearchEngine {
	index: SiteIndex,
	options: SearchOptions,
}

impl SearchEngine {
	pub fn new(index: SiteIndex) -> Self {
		Self::with_options(index, SearchOptions::default())
	}

	pub fn with_options(index: SiteIndex, options: SearchOptions) -> Self {
		Self { index, options }
	}

	/// Build the index from a parsed artifact using the service settings.
	pub fn from_artifact(artifact: SearchIndexArtifact, settings: &SearchSettings) -> Result<Self> {
		let index = SiteIndex::load_with(
			artifact.config,
			artifact.docs,
			IndexOptions { title_boost: settings.title_boost },
		)?;
		let options = SearchOptions { prefix_match: settings.prefix_match, snippet_chars: settings.snippet_chars };
		Ok(Self::with_options(index, options))
	}

	pub fn index(&self) -> &SiteIndex {
		&self.index
	}

	pub fn options(&self) -> SearchOptions {
		self.options
	}

	/// Ranked matches for `query`: descending score, ties in document order.
	///
	/// Empty and stop-word-only queries yield no results. A token repeated in
	/// the query is scored once.
	pub fn search(&self, query: &str) -> Vec<ScoredDocument<'_>> {
		let tokens = self.query_terms(query);
		if tokens.is_empty() {
			return Vec::new();
		}

		let mut scores = vec![0u32; self.index.len()];
		for token in &tokens {
			if self.options.prefix_match {
				for (_, postings) in self.index.prefix_postings(token) {
					for p in postings { scores[p.doc] = scores[p.doc].saturating_add(p.tf); }
				}
			} else {
				for p in self.index.postings(token) { scores[p.doc] = scores[p.doc].saturating_add(p.tf); }
			}
		}

		let mut results: Vec<ScoredDocument<'_>> = scores
			.into_iter()
			.enumerate()
			.filter(|&(_, score)| score > 0)
			.filter_map(|(id, score)| self.index.document(id).map(|document| ScoredDocument { id, document, score }))
			.collect();
		// stable: equal scores keep document order
		results.sort_by(|a, b| b.score.cmp(&a.score));
		tracing::debug!(query, terms = tokens.len(), hits = results.len(), "search");
		results
	}

	/// `search` shaped for the wire, truncated to `limit`, with snippets.
	pub fn search_hits(&self, query: &str, limit: usize) -> Vec<SearchHit> {
		let terms = self.query_terms(query);
		self.search(query)
			.into_iter()
			.take(limit)
			.map(|hit| SearchHit {
				location: hit.document.location.clone(),
				title: hit.document.title.clone(),
				snippet: snippet(&hit.document.text, &terms, self.options.snippet_chars),
				score: hit.score,
			})
			.collect()
	}

	fn query_terms(&self, query: &str) -> Vec<String> {
		let mut terms = self.index.analyzer().analyze(query);
		let mut seen = std::collections::HashSet::new();
		terms.retain(|t| seen.insert(t.clone()));
		terms
	}
}

impl Searcher for SearchEngine {
	fn search_hits(&self, query: &str, limit: usize) -> Vec<SearchHit> { Self::search_hits(self, query, limit) }
	fn len(&self) -> usize { self.index.len() }
}

/// A window of at most `width` characters around the first word in `text`
/// starting with one of `terms`, or the start of `text` when none does.
/// Cut edges are marked with an ellipsis.
pub fn snippet(text: &str, terms: &[String], width: usize) -> String {
	if width == 0 || text.is_empty() {
		return String::new();
	}
	let chars: Vec<char> = text.chars().collect();
	let lower: Vec<char> = chars.iter().map(|c| c.to_lowercase().next().unwrap_or(*c)).collect();

	let anchor = terms
		.iter()
		.filter_map(|t| find_word_start(&lower, &t.chars().collect::<Vec<_>>()))
		.min()
		.unwrap_or(0);

	let mut start = anchor.saturating_sub(width / 3);
	let end = (start + width).min(chars.len());
	if end == chars.len() {
		start = end.saturating_sub(width);
	}
	// avoid starting mid-word when the cut is not at the anchor itself
	if start > 0 && start < anchor && !chars[start - 1].is_whitespace() {
		if let Some(ws) = chars[start..anchor].iter().position(|c| c.is_whitespace()) {
			start += ws + 1;
		}
	}

	let body: String = chars[start..end].iter().collect();
	let mut out = String::with_capacity(body.len() + 6);
	if start > 0 { out.push('\u{2026}'); }
	out.push_str(body.trim());
	if end < chars.len() { out.push('\u{2026}'); }
	out
}

fn find_word_start(haystack: &[char], needle: &[char]) -> Option<usize> {
	if needle.is_empty() || needle.len() > haystack.len() {
		return None;
	}
	(0..=haystack.len() - needle.len())
		.find(|&i| (i == 0 || !haystack[i - 1].is_alphanumeric()) && haystack[i..i + needle.len()] == *needle)
}
