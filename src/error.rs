// File: src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data format: {texts} texts, {labels} labels")]
    InvalidData { texts: usize, labels: usize },

    #[error("Training split must contain both spam and non-spam examples ({spam} spam, {ham} ham)")]
    SingleClass { spam: usize, ham: usize },

    #[error("Empty vocabulary; training texts contain no usable tokens")]
    EmptyVocabulary,

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Incompatible model: vectorizer has {vocabulary} features, classifier expects {classifier}")]
    IncompatibleModel { vocabulary: usize, classifier: usize },
}

pub type Result<T> = std::result::Result<T, SpamError>;
