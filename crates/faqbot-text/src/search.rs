use std::sync::Arc;
use tracing::trace;

use faqbot_core::config::FieldWeights;
use faqbot_core::traits::FaqMatcher;
use faqbot_core::types::{FaqRecord, ScoredMatch};

use crate::index::{build_query_vector, magnitude, CorpusIndex, TermVector};

/// Cosine of the angle between two non-negative term vectors, in `[0, 1]`.
/// Zero when either vector is empty or all-zero.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f32 {
    cosine_with_norms(a, magnitude(a), b, magnitude(b))
}

/// [`cosine_similarity`] with both magnitudes already known.
fn cosine_with_norms(a: &TermVector, mag_a: f64, b: &TermVector, mag_b: f64) -> f32 {
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    // Walk the shorter map; BTreeMap order keeps the sum identical either way round.
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = short
        .iter()
        .filter_map(|(token, &w)| long.get(token).map(|&other| f64::from(w) * f64::from(other)))
        .sum();
    let score = (dot / (mag_a * mag_b)) as f32;
    if score.is_finite() { score.clamp(0.0, 1.0) } else { 0.0 }
}

/// Ranks every indexed record against a query by cosine similarity.
#[derive(Debug, Clone, Default)]
pub struct CosineMatcher {
    index: CorpusIndex,
}

impl CosineMatcher {
    pub fn new(index: CorpusIndex) -> Self { Self { index } }

    pub fn from_records<I>(records: I, weights: &FieldWeights) -> Self
    where
        I: IntoIterator<Item = FaqRecord>,
    {
        Self::new(CorpusIndex::build(records, weights))
    }

    pub fn index(&self) -> &CorpusIndex { &self.index }

    fn scores<'a>(&'a self, query: &'a TermVector) -> impl Iterator<Item = (usize, f32)> + 'a {
        let query_norm = magnitude(query);
        self.index
            .entries()
            .iter()
            .enumerate()
            .map(move |(i, entry)| (i, cosine_with_norms(query, query_norm, &entry.vector, entry.norm)))
    }

    fn scored(&self, position: usize, score: f32) -> ScoredMatch {
        ScoredMatch { record: Arc::clone(&self.index.entries()[position].record), score }
    }
}

impl FaqMatcher for CosineMatcher {
    fn len(&self) -> usize { self.index.len() }

    fn find_best(&self, query: &str) -> Option<ScoredMatch> {
        let query_vec = build_query_vector(query);
        if query_vec.is_empty() {
            return None;
        }
        let mut best: Option<(usize, f32)> = None;
        for (position, score) in self.scores(&query_vec) {
            // Strictly greater: the earliest record keeps a tie.
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((position, score));
            }
        }
        let (position, score) = best?;
        let found = self.scored(position, score);
        trace!(score, question = %found.record.question, "best FAQ candidate");
        Some(found)
    }

    fn top_k(&self, query: &str, k: usize) -> Vec<ScoredMatch> {
        let query_vec = build_query_vector(query);
        if query_vec.is_empty() || k == 0 {
            return Vec::new();
        }
        let mut ranked: Vec<(usize, f32)> = self.scores(&query_vec).collect();
        // Stable sort: equal scores stay in corpus order.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
            .into_iter()
            .take(k)
            .filter(|(_, score)| *score > 0.0)
            .map(|(position, score)| self.scored(position, score))
            .collect()
    }
}
