use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid corpus document: {0}")]
    InvalidCorpus(String),

    #[error("Failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse corpus JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
