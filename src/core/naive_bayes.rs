// File: src/core/naive_bayes.rs
use crate::core::types::SparseVector;
use crate::error::{Result, SpamError};
use serde::{Deserialize, Serialize};

const HAM: usize = 0;
const SPAM: usize = 1;

/// Multinomial Naive Bayes over two classes, `[not-spam, spam]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    alpha: f64,
    class_count: [usize; 2],
    class_log_prior: [f64; 2],
    /// `feature_log_prob[class][feature]`, smoothed with `alpha`.
    feature_log_prob: [Vec<f64>; 2],
}

impl MultinomialNb {
    /// Fits the model. Both classes must be present in `labels`.
    pub fn fit(samples: &[SparseVector], labels: &[bool], alpha: f64, n_features: usize) -> Result<Self> {
        validate_alpha(alpha)?;
        if samples.len() != labels.len() {
            return Err(SpamError::InvalidData { texts: samples.len(), labels: labels.len() });
        }

        let mut class_count = [0usize; 2];
        let mut feature_count = [vec![0.0f64; n_features], vec![0.0f64; n_features]];
        for (sample, &is_spam) in samples.iter().zip(labels) {
            let class = if is_spam { SPAM } else { HAM };
            class_count[class] += 1;
            for &(feature, value) in sample {
                feature_count[class][feature] += value;
            }
        }

        if class_count[HAM] == 0 || class_count[SPAM] == 0 {
            return Err(SpamError::SingleClass { spam: class_count[SPAM], ham: class_count[HAM] });
        }

        let total = samples.len() as f64;
        let class_log_prior = [
            (class_count[HAM] as f64 / total).ln(),
            (class_count[SPAM] as f64 / total).ln(),
        ];
        let feature_log_prob = feature_count.map(|counts| {
            let denominator = (counts.iter().sum::<f64>() + alpha * n_features as f64).ln();
            counts.iter().map(|count| (count + alpha).ln() - denominator).collect()
        });

        tracing::debug!(
            spam = class_count[SPAM],
            ham = class_count[HAM],
            features = n_features,
            "fitted multinomial naive bayes"
        );

        Ok(Self { alpha, class_count, class_log_prior, feature_log_prob })
    }

    /// Probability that `sample` is spam.
    pub fn predict_proba(&self, sample: &SparseVector) -> f64 {
        let ham = self.joint_log_likelihood(sample, HAM);
        let spam = self.joint_log_likelihood(sample, SPAM);
        // Two-class softmax; equal likelihoods give exactly 0.5
        1.0 / (1.0 + (ham - spam).exp())
    }

    pub fn predict(&self, sample: &SparseVector) -> bool {
        self.predict_proba(sample) > 0.5
    }

    pub fn n_features(&self) -> usize {
        self.feature_log_prob[SPAM].len()
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Training examples seen per class, `(ham, spam)`.
    pub fn class_count(&self) -> (usize, usize) {
        (self.class_count[HAM], self.class_count[SPAM])
    }

    fn joint_log_likelihood(&self, sample: &SparseVector, class: usize) -> f64 {
        let log_prob = &self.feature_log_prob[class];
        self.class_log_prior[class]
            + sample
                .iter()
                .filter_map(|&(feature, value)| log_prob.get(feature).map(|lp| lp * value))
                .sum::<f64>()
    }
}

pub fn validate_alpha(alpha: f64) -> Result<()> {
    if alpha.is_finite() && alpha > 0.0 {
        Ok(())
    } else {
        Err(SpamError::InvalidConfig(format!("alpha must be positive and finite, got {}", alpha)))
    }
}
