//! Tokenization and the named processing pipeline from the index config.
use std::collections::HashSet;
use std::str::FromStr;

use regex::Regex;

use docsearch_core::types::IndexConfig;
use docsearch_core::{Error, Result};

/// English stop words of the search library the site generator targets.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
	"a","able","about","across","after","all","almost","also","am","among","an","and","any","are","as","at",
	"be","because","been","but","by","can","cannot","could","dear","did","do","does","either","else","ever",
	"every","for","from","get","got","had","has","have","he","her","hers","him","his","how","however","i","if",
	"in","into","is","it","its","just","least","let","like","likely","may","me","might","most","must","my",
	"neither","no","nor","not","of","off","often","on","only","or","other","our","own","rather","said","say",
	"says","she","should","since","so","some","than","that","the","their","them","then","there","these","they",
	"this","tis","to","too","twas","us","wants","was","we","were","what","when","where","which","while","who",
	"whom","why","will","with","would","yet","you","your",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
	Trimmer,
	StopWordFilter,
	/// Accepted so generator defaults load; terms are left unstemmed.
	Stemmer,
}

impl FromStr for PipelineStage {
	type Err = Error;

	fn from_str(name: &str) -> Result<Self> {
		match name {
			"trimmer" => Ok(Self::Trimmer),
			"stopWordFilter" => Ok(Self::StopWordFilter),
			"stemmer" => Ok(Self::Stemmer),
			other => Err(Error::malformed(format!("unknown pipeline stage '{}'", other))),
		}
	}
}

#[derive(Debug, Clone)]
pub struct Analyzer {
	separator: Regex,
	stages: Vec<PipelineStage>,
	stop_words: HashSet<&'static str>,
}

impl Analyzer {
	pub fn from_config(config: &IndexConfig) -> Result<Self> {
		let separator = Regex::new(&config.separator)
			.map_err(|e| Error::malformed(format!("invalid separator '{}': {}", config.separator, e)))?;
		let stages = config
			.pipeline
			.iter()
			.map(|name| name.parse())
			.collect::<Result<Vec<PipelineStage>>>()?;
		if stages.contains(&PipelineStage::Stemmer) {
			tracing::warn!("stemmer stage is not supported; terms are matched unstemmed");
		}

		let mut stop_words = HashSet::new();
		if config.lang.is_empty() || config.lang.iter().any(|l| l == "en") {
			stop_words.extend(ENGLISH_STOP_WORDS.iter().copied());
		}
		for lang in config.lang.iter().filter(|l| l.as_str() != "en") {
			tracing::warn!(lang = %lang, "no stop word list for language; none applied");
		}
		Ok(Self { separator, stages, stop_words })
	}

	/// Split on the separator, lowercase and trim surrounding punctuation.
	pub fn tokenize(&self, text: &str) -> Vec<String> {
		self.separator
			.split(text)
			.map(|raw| trim_token(&raw.to_lowercase()).to_string())
			.filter(|t| !t.is_empty())
			.collect()
	}

	/// `tokenize` followed by every configured stage, in order.
	pub fn analyze(&self, text: &str) -> Vec<String> {
		let mut tokens = self.tokenize(text);
		for stage in &self.stages {
			match stage {
				PipelineStage::Trimmer => {
					tokens = tokens.into_iter().map(|t| trim_token(&t).to_string()).filter(|t| !t.is_empty()).collect();
				}
				PipelineStage::StopWordFilter => tokens.retain(|t| !self.is_stop_word(t)),
				PipelineStage::Stemmer => {}
			}
		}
		tokens
	}

	pub fn is_stop_word(&self, token: &str) -> bool {
		self.stop_words.contains(token)
	}

	pub fn stages(&self) -> &[PipelineStage] {
		&self.stages
	}
}

fn trim_token(token: &str) -> &str {
	token.trim_matches(|c: char| !c.is_alphanumeric())
}
