//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults + `config.toml` + `config.<env>.toml`
//! + `FAQBOT_*` env vars (`__` separates nested keys, e.g.
//! `FAQBOT_MATCHER__MIN_SCORE=0.3`). Provides helpers to expand `~` and `${VAR}`
//! and to resolve relative paths against the directory the config came from.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Largest accepted field weight.
pub const MAX_FIELD_WEIGHT: f32 = 1e6;

/// Relative importance of each record field when building its term vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldWeights {
    pub question: f32,
    pub keywords: f32,
    pub answer: f32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self { question: 0.6, keywords: 0.9, answer: 0.25 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusSettings {
    pub path: String,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self { path: "faqs.json".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherSettings {
    /// Minimum cosine score for an answer to be returned instead of the fallback.
    pub min_score: f32,
    pub suggestion_limit: usize,
    pub weights: FieldWeights,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self { min_score: 0.25, suggestion_limit: 5, weights: FieldWeights::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Messages {
    pub fallback: String,
    pub loading: String,
    pub unavailable: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            fallback: "Sorry, I couldn't find an answer to that. Please try rephrasing or contact HR.".to_string(),
            loading: "I'm still loading the knowledge base, please try again in a moment.".to_string(),
            unavailable: "I can't load the knowledge base right now. Please try again later.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    pub corpus: CorpusSettings,
    pub matcher: MatcherSettings,
    pub messages: Messages,
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        let m = &self.matcher;
        if !(0.0..=1.0).contains(&m.min_score) {
            return Err(Error::InvalidConfig(format!("matcher.min_score must be within [0, 1], got {}", m.min_score)));
        }
        if m.suggestion_limit == 0 {
            return Err(Error::InvalidConfig("matcher.suggestion_limit must be at least 1".to_string()));
        }
        for (name, w) in [("question", m.weights.question), ("keywords", m.weights.keywords), ("answer", m.weights.answer)] {
            if !(0.0..=MAX_FIELD_WEIGHT).contains(&w) {
                return Err(Error::InvalidConfig(format!("matcher.weights.{name} must be within [0, {MAX_FIELD_WEIGHT}], got {w}")));
            }
        }
        for (name, text) in [("fallback", &self.messages.fallback), ("loading", &self.messages.loading), ("unavailable", &self.messages.unavailable)] {
            if text.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("messages.{name} must not be empty")));
            }
        }
        Ok(())
    }
}

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_from(Path::new("."), &env_name)
    }

    /// Load `config.toml` and the env-specific overlay from `base_dir`.
    /// Missing files are fine; defaults fill the gaps.
    pub fn load_from(base_dir: &Path, env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(base_dir.join("config.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(base_dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base_dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base_dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("FAQBOT_").split("__"));

        let config = Self { figment, base_dir: base_dir.to_path_buf() };
        config.validate_for_env(env_name)?;
        Ok(config)
    }

    /// Wrap already-built settings, e.g. when the host application owns configuration.
    pub fn from_settings(settings: &Settings, base_dir: &Path) -> Self {
        Self { figment: Figment::from(Serialized::defaults(settings)), base_dir: base_dir.to_path_buf() }
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    pub fn settings(&self) -> anyhow::Result<Settings> {
        self.figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to read settings: {}", e))
    }

    /// Corpus location with `~`/`${VAR}` expanded, relative paths anchored at the config directory.
    pub fn corpus_path(&self) -> anyhow::Result<PathBuf> {
        let path: String = self.get("corpus.path")?;
        Ok(resolve_with_base(&self.base_dir, path))
    }

    fn validate_for_env(&self, env: &str) -> anyhow::Result<()> {
        let settings = self.settings()?;
        settings.validate()?;
        match env {
            "prod" | "production" => {
                if settings.matcher.min_score <= 0.0 {
                    return Err(Error::InvalidConfig("prod config must set matcher.min_score above 0".to_string()).into());
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
