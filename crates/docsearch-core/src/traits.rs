use crate::types::SearchHit;

/// Read-only query surface over a loaded corpus.
///
/// Implementations are immutable after construction, so a single instance can
/// be shared across threads without locking.
pub trait Searcher: Send + Sync {
    fn search_hits(&self, query: &str, limit: usize) -> Vec<SearchHit>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
