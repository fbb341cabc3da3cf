// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Index of a term in the fitted vocabulary.
pub type FeatureId = usize;

/// A TF-IDF document vector. Only non-zero entries are stored,
/// ordered by ascending `FeatureId`.
pub type SparseVector = Vec<(FeatureId, f64)>;

/// One labeled training example.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub content: String,
    pub is_spam: bool,
}

impl Example {
    pub fn new(content: impl Into<String>, is_spam: bool) -> Self {
        Self { content: content.into(), is_spam }
    }
}

/// The classification of a single text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub is_spam: bool,
    /// Spam probability as a percentage, in [0, 100].
    pub spam_score: f64,
    /// 0 at the decision boundary, 1 at full certainty.
    pub confidence: f64,
}

impl Prediction {
    /// Strict threshold: a probability of exactly 0.5 is not spam.
    pub fn from_probability(probability: f64) -> Self {
        Self {
            is_spam: probability > 0.5,
            spam_score: probability * 100.0,
            confidence: (probability - 0.5).abs() * 2.0,
        }
    }
}
