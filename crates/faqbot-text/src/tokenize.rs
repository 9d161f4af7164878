use once_cell::sync::Lazy;
use regex::Regex;

static NON_TOKEN_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]").expect("static pattern compiles"));

/// Lowercase, replace anything but ASCII letters/digits/whitespace with a space,
/// collapse whitespace runs and trim.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = NON_TOKEN_CHARS.replace_all(&lowered, " ");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Unigrams followed by every adjacent word pair, e.g.
/// `"apply for job"` -> `apply, for, job, apply for, for job`.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let words: Vec<&str> = normalized.split(' ').filter(|w| !w.is_empty()).collect();
    let mut tokens: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
    tokens.extend(words.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    tokens
}

/// Keywords contribute unigrams only.
pub fn keyword_tokens(keyword: &str) -> Vec<String> {
    normalize(keyword).split_whitespace().map(str::to_string).collect()
}
