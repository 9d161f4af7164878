use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use faqbot_core::config::FieldWeights;
use faqbot_core::types::FaqRecord;

use crate::tokenize::{keyword_tokens, tokenize};

/// Sparse token -> weight map. Ordered so summation order, and therefore every
/// score, is reproducible across runs.
pub type TermVector = BTreeMap<String, f32>;

fn accumulate<I>(vec: &mut TermVector, tokens: I, weight: f32)
where
    I: IntoIterator<Item = String>,
{
    for token in tokens {
        *vec.entry(token).or_insert(0.0) += weight;
    }
}

/// Term vector for one record: question, keyword and answer tokens each add
/// their field weight per occurrence.
pub fn build_vector(record: &FaqRecord, weights: &FieldWeights) -> TermVector {
    let mut vec = TermVector::new();
    accumulate(&mut vec, tokenize(&record.question), weights.question);
    accumulate(&mut vec, record.keywords.iter().flat_map(|k| keyword_tokens(k)), weights.keywords);
    accumulate(&mut vec, tokenize(&record.answer), weights.answer);
    vec
}

/// Euclidean length of a term vector. Summed in `f64` so large field weights
/// cannot overflow the squares.
pub fn magnitude(v: &TermVector) -> f64 {
    v.values().map(|&w| f64::from(w) * f64::from(w)).sum::<f64>().sqrt()
}

/// Term frequency of the query's tokens (1.0 per occurrence).
pub fn build_query_vector(text: &str) -> TermVector {
    let mut vec = TermVector::new();
    accumulate(&mut vec, tokenize(text), 1.0);
    vec
}

#[derive(Debug, Clone)]
pub struct IndexedRecord {
    pub record: Arc<FaqRecord>,
    pub vector: TermVector,
    /// `magnitude(&vector)`, fixed at index time.
    pub norm: f64,
}

/// One entry per record, in corpus order.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    entries: Vec<IndexedRecord>,
}

impl CorpusIndex {
    pub fn build<I>(records: I, weights: &FieldWeights) -> Self
    where
        I: IntoIterator<Item = FaqRecord>,
    {
        let entries: Vec<IndexedRecord> = records
            .into_iter()
            .map(|record| {
                let vector = build_vector(&record, weights);
                let norm = magnitude(&vector);
                IndexedRecord { record: Arc::new(record), vector, norm }
            })
            .collect();
        let vocabulary: usize = entries.iter().map(|e| e.vector.len()).sum();
        debug!(records = entries.len(), terms = vocabulary, "built FAQ term vectors");
        Self { entries }
    }

    pub fn entries(&self) -> &[IndexedRecord] { &self.entries }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
