//! Domain types shared by the matcher and the assistant facade.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One question/answer entry of the FAQ corpus.
///
/// - `question`/`answer`: required text; records lacking either are dropped at parse time
/// - `keywords`: authoritative topic hints, empty when the document omits them
/// - `category`: name of the enclosing category group, if the document had one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl FaqRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { question: question.into(), answer: answer.into(), keywords: Vec::new(), category: None }
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A record paired with its similarity to a query. Higher is better; always in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct ScoredMatch {
    pub record: Arc<FaqRecord>,
    pub score: f32,
}

/// Social phrases answered without consulting the corpus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SmallTalkKind {
    Greeting,
    Farewell,
    Thanks,
    HowAreYou,
}

/// Labels where a reply's text came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReplyKind {
    Faq,
    SmallTalk(SmallTalkKind),
    Fallback,
    Loading,
    Unavailable,
}

/// What the UI renders for one user message.
///
/// `matched` is true only when `answer` comes from a corpus record that cleared
/// the acceptance threshold; `score` is that record's similarity, otherwise 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reply {
    pub answer: String,
    pub matched: bool,
    pub score: f32,
    pub kind: ReplyKind,
}

impl Reply {
    pub fn faq(answer: impl Into<String>, score: f32) -> Self {
        Self { answer: answer.into(), matched: true, score, kind: ReplyKind::Faq }
    }

    pub fn unmatched(answer: impl Into<String>, kind: ReplyKind) -> Self {
        Self { answer: answer.into(), matched: false, score: 0.0, kind }
    }
}

/// Live suggestion-as-you-type entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub question: String,
    pub score: f32,
}

impl From<&ScoredMatch> for Suggestion {
    fn from(m: &ScoredMatch) -> Self {
        Self { question: m.record.question.clone(), score: m.score }
    }
}
