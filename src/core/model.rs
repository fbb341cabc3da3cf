// File: src/core/model.rs
use crate::core::naive_bayes::MultinomialNb;
use crate::core::types::{Example, Prediction};
use crate::core::vectorizer::{TfidfVectorizer, VectorizerConfig};
use crate::error::{Result, SpamError};
use serde::{Deserialize, Serialize};

/// A fitted vectorizer and the classifier trained on its output.
/// The two halves are only ever created, stored and loaded together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpamModel {
    vectorizer: TfidfVectorizer,
    classifier: MultinomialNb,
}

impl SpamModel {
    /// Fits the vectorizer on `examples`, then the classifier on the vectorized examples.
    pub fn fit(examples: &[Example], vectorizer_config: &VectorizerConfig, alpha: f64) -> Result<Self> {
        let texts: Vec<&str> = examples.iter().map(|e| e.content.as_str()).collect();
        let labels: Vec<bool> = examples.iter().map(|e| e.is_spam).collect();

        let vectorizer = TfidfVectorizer::fit(&texts, vectorizer_config)?;
        let samples = vectorizer.transform_all(&texts);
        let classifier = MultinomialNb::fit(&samples, &labels, alpha, vectorizer.n_features())?;

        Ok(Self { vectorizer, classifier })
    }

    pub fn spam_probability(&self, text: &str) -> f64 {
        self.classifier.predict_proba(&self.vectorizer.transform(text))
    }

    pub fn is_spam(&self, text: &str) -> bool {
        self.classifier.predict(&self.vectorizer.transform(text))
    }

    pub fn predict(&self, text: &str) -> Prediction {
        Prediction::from_probability(self.spam_probability(text))
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &MultinomialNb {
        &self.classifier
    }

    /// Checks that the classifier was trained on this vectorizer's feature space.
    pub(crate) fn check_compatible(&self) -> Result<()> {
        let vocabulary = self.vectorizer.n_features();
        let classifier = self.classifier.n_features();
        if vocabulary != classifier
            || vocabulary != self.vectorizer.idf_len()
            || !self.vectorizer.ids_in_range()
        {
            return Err(SpamError::IncompatibleModel { vocabulary, classifier });
        }
        Ok(())
    }
}
