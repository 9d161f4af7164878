//! Corpus document parsing and loading.
//!
//! Accepts `{ "faqs": [...] }` where each entry is either a record or a
//! category group `{ "category": "...", "questions": [record, ...] }`. Groups
//! are flattened in document order. Broken records are skipped, never fatal.

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::types::FaqRecord;

/// The flattened, validated record list plus how many entries were rejected.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub records: Vec<FaqRecord>,
    pub skipped: usize,
}

impl Corpus {
    pub fn from_records(records: Vec<FaqRecord>) -> Self { Self { records, skipped: 0 } }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

#[derive(Deserialize)]
struct RawRecord {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    keywords: Option<Value>,
}

pub fn parse_corpus(json: &str) -> Result<Corpus> {
    let document: Value = serde_json::from_str(json)?;
    let entries = document
        .get("faqs")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::InvalidCorpus("document has no `faqs` array".to_string()))?;

    let mut corpus = Corpus::default();
    for (position, entry) in entries.iter().enumerate() {
        match entry.get("questions") {
            Some(Value::Array(questions)) => {
                let category = entry.get("category").and_then(Value::as_str);
                for (inner, item) in questions.iter().enumerate() {
                    push_record(&mut corpus, item, category, || format!("faqs[{position}].questions[{inner}]"));
                }
            }
            Some(_) => {
                warn!(entry = position, "skipping category group whose `questions` is not an array");
                corpus.skipped += 1;
            }
            None => push_record(&mut corpus, entry, None, || format!("faqs[{position}]")),
        }
    }
    Ok(corpus)
}

fn push_record<F>(corpus: &mut Corpus, value: &Value, category: Option<&str>, location: F)
where
    F: Fn() -> String,
{
    match record_from_value(value, category) {
        Some(record) => corpus.records.push(record),
        None => {
            warn!(location = %location(), "skipping FAQ record without usable question/answer");
            corpus.skipped += 1;
        }
    }
}

fn record_from_value(value: &Value, category: Option<&str>) -> Option<FaqRecord> {
    let raw = RawRecord::deserialize(value).ok()?;
    let question = raw.question.filter(|q| !q.trim().is_empty())?;
    let answer = raw.answer.filter(|a| !a.trim().is_empty())?;
    let keywords = match raw.keywords {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).map(str::to_string).collect(),
        _ => Vec::new(),
    };
    Some(FaqRecord { question, answer, keywords, category: category.map(str::to_string) })
}

/// Read and parse a corpus document from disk.
pub async fn load_corpus(path: &Path) -> Result<Corpus> {
    let json = match tokio::fs::read_to_string(path).await {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };
    let corpus = parse_corpus(&json)?;
    info!(path = %path.display(), records = corpus.len(), skipped = corpus.skipped, "loaded FAQ corpus");
    Ok(corpus)
}
