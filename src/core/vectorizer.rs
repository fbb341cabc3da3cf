// File: src/core/vectorizer.rs
use crate::core::tokenizer::analyze;
use crate::core::types::{FeatureId, SparseVector};
use crate::error::{Result, SpamError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Keep only the most frequent terms across the training corpus.
    pub max_features: Option<usize>,
    pub ngram_range: (usize, usize),
    pub stop_words: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self { max_features: Some(10_000), ngram_range: (1, 2), stop_words: true }
    }
}

impl VectorizerConfig {
    pub fn validate(&self) -> Result<()> {
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(SpamError::InvalidConfig(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }
        if self.max_features == Some(0) {
            return Err(SpamError::InvalidConfig("max_features must be positive".to_string()));
        }
        Ok(())
    }
}

/// A TF-IDF vectorizer whose vocabulary and idf weights are frozen at fit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    config: VectorizerConfig,
    vocabulary: BTreeMap<String, FeatureId>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learns vocabulary and document frequencies from `texts`.
    pub fn fit<S: AsRef<str>>(texts: &[S], config: &VectorizerConfig) -> Result<Self> {
        config.validate()?;

        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        let mut term_count: HashMap<String, usize> = HashMap::new();

        for text in texts {
            let terms = analyze(text.as_ref(), config.stop_words, config.ngram_range);
            let mut seen = HashSet::new();
            for term in terms {
                *term_count.entry(term.clone()).or_insert(0) += 1;
                if seen.insert(term.clone()) {
                    *document_frequency.entry(term).or_insert(0) += 1;
                }
            }
        }

        if term_count.is_empty() {
            return Err(SpamError::EmptyVocabulary);
        }

        let mut kept: Vec<(String, usize)> = term_count.into_iter().collect();
        if let Some(limit) = config.max_features {
            // Highest corpus frequency first, ties alphabetical
            kept.sort_by(|(a, ca), (b, cb)| cb.cmp(ca).then_with(|| a.cmp(b)));
            kept.truncate(limit);
        }
        kept.sort_by(|(a, _), (b, _)| a.cmp(b));

        let n_docs = texts.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(kept.len());
        for (id, (term, _)) in kept.into_iter().enumerate() {
            let df = document_frequency[&term] as f64;
            idf.push(((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);
            vocabulary.insert(term, id);
        }

        tracing::debug!(features = vocabulary.len(), documents = texts.len(), "fitted tf-idf vocabulary");

        Ok(Self { config: config.clone(), vocabulary, idf })
    }

    /// Maps a text into the frozen feature space, L2 normalised.
    /// Unknown terms are ignored; a text with no known terms yields an empty vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<FeatureId, f64> = BTreeMap::new();
        for term in analyze(text, self.config.stop_words, self.config.ngram_range) {
            if let Some(&id) = self.vocabulary.get(&term) {
                *counts.entry(id).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(id, count)| (id, count * self.idf[id]))
            .collect();

        let norm = vector.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, value) in vector.iter_mut() {
                *value /= norm;
            }
        }
        vector
    }

    pub fn transform_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<SparseVector> {
        texts.iter().map(|text| self.transform(text.as_ref())).collect()
    }

    pub fn n_features(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn idf_len(&self) -> usize {
        self.idf.len()
    }

    /// Every vocabulary entry points at an idf weight.
    pub(crate) fn ids_in_range(&self) -> bool {
        self.vocabulary.values().all(|&id| id < self.idf.len())
    }

    pub fn feature_id(&self, term: &str) -> Option<FeatureId> {
        self.vocabulary.get(term).copied()
    }
}
