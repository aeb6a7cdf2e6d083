use std::collections::{BTreeMap, HashMap, HashSet};
use std::ops::Bound;

use docsearch_core::types::{DocId, Document, IndexConfig, RawDocument};
use docsearch_core::{Error, Result};

use crate::analyzer::Analyzer;
use crate::html::strip_html;

/// One document's entry in a term's posting list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
	pub doc: DocId,
	pub tf: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
	/// Each title occurrence counts this many times toward a term's frequency.
	pub title_boost: u32,
}

impl Default for IndexOptions {
	fn default() -> Self {
		Self { title_boost: 1 }
	}
}

/// Immutable inverted index over the site's documents.
///
/// Posting lists are ordered by `DocId`, which is the position of the
/// document in the artifact. The term dictionary is ordered so that prefix
/// lookups are a range scan.
#[derive(Debug, Clone)]
pub struct SiteIndex {
	config: IndexConfig,
	analyzer: Analyzer,
	documents: Vec<Document>,
	terms: BTreeMap<String, Vec<Posting>>,
}

impl SiteIndex {
	pub fn load(config: IndexConfig, docs: Vec<RawDocument>) -> Result<Self> {
		Self::load_with(config, docs, IndexOptions::default())
	}

	/// Validate the documents and build the index. Nothing is returned unless
	/// every document is valid.
	pub fn load_with(config: IndexConfig, docs: Vec<RawDocument>, options: IndexOptions) -> Result<Self> {
		if docs.is_empty() {
			return Err(Error::malformed("index contains no documents"));
		}
		let analyzer = Analyzer::from_config(&config)?;
		let documents = validate_documents(docs)?;

		let mut terms: BTreeMap<String, Vec<Posting>> = BTreeMap::new();
		for (doc, document) in documents.iter().enumerate() {
			let mut freqs: HashMap<String, u32> = HashMap::new();
			for token in analyzer.analyze(&document.title) {
				let tf = freqs.entry(token).or_insert(0);
				*tf = tf.saturating_add(options.title_boost);
			}
			for token in analyzer.analyze(&document.text) {
				let tf = freqs.entry(token).or_insert(0);
				*tf = tf.saturating_add(1);
			}
			for (term, tf) in freqs {
				terms.entry(term).or_default().push(Posting { doc, tf });
			}
		}

		tracing::info!(documents = documents.len(), terms = terms.len(), "search index loaded");
		Ok(Self { config, analyzer, documents, terms })
	}

	pub fn config(&self) -> &IndexConfig {
		&self.config
	}

	pub fn analyzer(&self) -> &Analyzer {
		&self.analyzer
	}

	pub fn documents(&self) -> &[Document] {
		&self.documents
	}

	pub fn document(&self, id: DocId) -> Option<&Document> {
		self.documents.get(id)
	}

	pub fn len(&self) -> usize {
		self.documents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.documents.is_empty()
	}

	pub fn term_count(&self) -> usize {
		self.terms.len()
	}

	/// Exact-term posting list; empty when the term is not indexed.
	pub fn postings(&self, term: &str) -> &[Posting] {
		self.terms.get(term).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Every indexed term starting with `prefix` (the term itself included).
	pub fn prefix_postings<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a [Posting])> + 'a {
		self.terms
			.range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
			.take_while(move |(term, _)| term.starts_with(prefix))
			.map(|(term, postings)| (term.as_str(), postings.as_slice()))
	}

	/// Terms ranked by total frequency across the corpus, most frequent first.
	pub fn top_terms(&self, n: usize) -> Vec<(&str, u32)> {
		let mut totals: Vec<(&str, u32)> = self
			.terms
			.iter()
			.map(|(term, postings)| (term.as_str(), postings.iter().map(|p| p.tf).sum()))
			.collect();
		totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
		totals.truncate(n);
		totals
	}
}

fn validate_documents(docs: Vec<RawDocument>) -> Result<Vec<Document>> {
	let mut seen: HashSet<String> = HashSet::with_capacity(docs.len());
	let mut documents = Vec::with_capacity(docs.len());
	for (position, raw) in docs.into_iter().enumerate() {
		let location = raw
			.location
			.filter(|l| !l.trim().is_empty())
			.ok_or_else(|| Error::malformed(format!("document #{} has no location", position)))?;
		if !seen.insert(location.clone()) {
			return Err(Error::malformed(format!("duplicate document location '{}'", location)));
		}
		documents.push(Document { location, title: strip_html(&raw.title), text: strip_html(&raw.text) });
	}
	Ok(documents)
}
