//! faqbot-text
//!
//! Lexical matching engine: unigram+bigram tokenization, field-weighted term
//! vectors, and cosine ranking over an in-memory FAQ corpus.

pub mod index;
pub mod search;
pub mod tokenize;

pub use index::{build_query_vector, build_vector, magnitude, CorpusIndex, IndexedRecord, TermVector};
pub use search::{cosine_similarity, CosineMatcher};
pub use tokenize::{keyword_tokens, normalize, tokenize};
