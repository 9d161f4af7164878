use crate::types::ScoredMatch;

pub trait FaqMatcher: Send + Sync {
    /// Number of indexed records.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool { self.len() == 0 }
    /// Highest-scoring record, first in corpus order on ties. `None` when nothing scores above zero.
    fn find_best(&self, query: &str) -> Option<ScoredMatch>;
    /// Up to `k` records with non-zero score, best first.
    fn top_k(&self, query: &str, k: usize) -> Vec<ScoredMatch>;
}
