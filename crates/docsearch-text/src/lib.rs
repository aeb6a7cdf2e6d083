//! docsearch-text
//!
//! In-memory inverted index and bag-of-words search over the documents of a
//! static site search artifact. See `index` and `search`.

pub mod analyzer;
pub mod html;
pub mod index;
pub mod search;

pub use analyzer::{Analyzer, PipelineStage};
pub use index::{IndexOptions, Posting, SiteIndex};
pub use search::{ScoredDocument, SearchEngine, SearchOptions};
