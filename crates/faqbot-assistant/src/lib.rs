//! faqbot-assistant
//!
//! The object a chat UI talks to. Owns the matcher once the corpus is loaded,
//! answers small talk directly, and turns low-confidence or unavailable
//! lookups into fixed messages so callers always get a renderable reply.

pub mod smalltalk;

use tracing::{debug, info, warn};

use faqbot_core::config::{Config, FieldWeights, Messages, Settings};
use faqbot_core::corpus::{load_corpus, Corpus};
use faqbot_core::error::{Error, Result};
use faqbot_core::traits::FaqMatcher;
use faqbot_core::types::{Reply, ReplyKind, Suggestion};
use faqbot_text::CosineMatcher;

/// Readiness of the corpus behind an [`Assistant`].
#[derive(Debug)]
pub enum LoadState<M> {
    Loading,
    Ready(M),
    Failed(String),
}

pub struct Assistant<M = CosineMatcher> {
    messages: Messages,
    min_score: f32,
    suggestion_limit: usize,
    weights: FieldWeights,
    state: LoadState<M>,
}

impl<M: FaqMatcher> Assistant<M> {
    /// A not-yet-ready assistant; pair with [`Assistant::install`] once the corpus load finishes.
    pub fn new(settings: &Settings) -> Self {
        Self {
            messages: settings.messages.clone(),
            min_score: settings.matcher.min_score,
            suggestion_limit: settings.matcher.suggestion_limit,
            weights: settings.matcher.weights,
            state: LoadState::Loading,
        }
    }

    /// Record the outcome of the one-time load. Later calls are ignored.
    pub fn install(&mut self, result: Result<M>) {
        if !matches!(self.state, LoadState::Loading) {
            warn!("knowledge base already installed; ignoring repeated load result");
            return;
        }
        self.state = match result {
            Ok(matcher) => {
                info!(records = matcher.len(), "knowledge base ready");
                LoadState::Ready(matcher)
            }
            Err(e) => {
                warn!(error = %e, "knowledge base unavailable");
                LoadState::Failed(e.to_string())
            }
        };
    }

    pub fn is_ready(&self) -> bool { matches!(self.state, LoadState::Ready(_)) }

    pub fn load_state(&self) -> &LoadState<M> { &self.state }

    /// Records available for matching; zero unless ready.
    pub fn len(&self) -> usize {
        match &self.state {
            LoadState::Ready(matcher) => matcher.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Answer one user message. Never fails: every path yields a reply.
    pub fn find_best(&self, text: &str) -> Reply {
        if let Some(kind) = smalltalk::classify(text) {
            return Reply::unmatched(smalltalk::response(kind), ReplyKind::SmallTalk(kind));
        }
        let matcher = match &self.state {
            LoadState::Ready(matcher) => matcher,
            LoadState::Loading => return Reply::unmatched(self.messages.loading.clone(), ReplyKind::Loading),
            LoadState::Failed(_) => return Reply::unmatched(self.messages.unavailable.clone(), ReplyKind::Unavailable),
        };
        match matcher.find_best(text) {
            Some(best) if best.score >= self.min_score => {
                debug!(score = best.score, question = %best.record.question, "answering from FAQ");
                Reply::faq(best.record.answer.clone(), best.score)
            }
            Some(best) => {
                debug!(score = best.score, threshold = self.min_score, "best FAQ below threshold; falling back");
                self.fallback()
            }
            None => self.fallback(),
        }
    }

    /// Live suggestions for partially typed input, best first, at most `k`.
    pub fn suggest(&self, text: &str, k: usize) -> Vec<Suggestion> {
        match &self.state {
            LoadState::Ready(matcher) => matcher.top_k(text, k).iter().map(Suggestion::from).collect(),
            _ => Vec::new(),
        }
    }

    /// [`Assistant::suggest`] with the configured limit.
    pub fn suggestions(&self, text: &str) -> Vec<Suggestion> { self.suggest(text, self.suggestion_limit) }

    fn fallback(&self) -> Reply { Reply::unmatched(self.messages.fallback.clone(), ReplyKind::Fallback) }
}

impl Assistant<CosineMatcher> {
    /// Install a corpus obtained by the host (e.g. fetched and parsed elsewhere),
    /// indexed with the weights this assistant was created with.
    pub fn install_corpus(&mut self, corpus: Result<Corpus>) {
        let matcher = corpus.map(|c| CosineMatcher::from_records(c.records, &self.weights));
        self.install(matcher);
    }
}

fn checked_settings(config: &Config) -> Result<Settings> {
    let settings = config.settings().map_err(|e| Error::InvalidConfig(e.to_string()))?;
    settings.validate()?;
    Ok(settings)
}

/// Single-shot startup: read and validate settings, load and index the corpus.
/// Any failure yields an assistant stuck in [`LoadState::Failed`] rather than an
/// error. Invalid settings fall back to the default messages.
pub async fn initialize(config: &Config) -> Assistant<CosineMatcher> {
    let settings = match checked_settings(config) {
        Ok(settings) => settings,
        Err(e) => {
            let mut assistant = Assistant::new(&Settings::default());
            assistant.install(Err(e));
            return assistant;
        }
    };
    let mut assistant = Assistant::new(&settings);
    let corpus = match config.corpus_path() {
        Ok(path) => load_corpus(&path).await,
        Err(e) => Err(Error::InvalidConfig(e.to_string())),
    };
    assistant.install_corpus(corpus);
    assistant
}
