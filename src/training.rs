// File: src/training.rs
use crate::core::model::SpamModel;
use crate::core::naive_bayes::validate_alpha;
use crate::core::types::{Example, Prediction};
use crate::core::vectorizer::VectorizerConfig;
use crate::dataset::{load_examples, train_test_split, LabelSchema};
use crate::error::{Result, SpamError};
use crate::metrics::Metrics;
use crate::persistence::{load_model, save_model};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_SEED: u64 = 42;
const DEFAULT_TEST_FRACTION: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub vectorizer: VectorizerConfig,
    /// Additive smoothing for the Naive Bayes feature counts.
    pub alpha: f64,
    pub test_fraction: f64,
    pub seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            vectorizer: VectorizerConfig::default(),
            alpha: 0.1,
            test_fraction: DEFAULT_TEST_FRACTION,
            seed: DEFAULT_SEED,
        }
    }
}

impl TrainConfig {
    /// Settings used when retraining from collected user feedback.
    pub fn feedback() -> Self {
        Self {
            vectorizer: VectorizerConfig { max_features: Some(5_000), ngram_range: (1, 2), stop_words: false },
            alpha: 1.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.vectorizer.validate()?;
        validate_alpha(self.alpha)?;
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(SpamError::InvalidConfig(format!(
                "test_fraction must be in (0, 1), got {}",
                self.test_fraction
            )));
        }
        Ok(())
    }
}

/// Outcome of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    #[serde(flatten)]
    pub metrics: Metrics,
    /// Number of usable examples in the training file.
    pub samples: usize,
}

/// Splits, fits on the training portion only and scores the held-out portion.
pub fn train_examples(examples: &[Example], config: &TrainConfig) -> Result<(SpamModel, Metrics)> {
    config.validate()?;

    let (train_set, test_set) = train_test_split(examples, config.test_fraction, config.seed);
    tracing::debug!(train = train_set.len(), test = test_set.len(), seed = config.seed, "split examples");

    let model = SpamModel::fit(&train_set, &config.vectorizer, config.alpha)?;

    let truth: Vec<bool> = test_set.iter().map(|e| e.is_spam).collect();
    let predicted: Vec<bool> = test_set.iter().map(|e| model.is_spam(&e.content)).collect();
    let metrics = Metrics::compute(&truth, &predicted);

    Ok((model, metrics))
}

pub fn train(
    training_data_path: &Path,
    model_save_path: &Path,
    schema: LabelSchema,
    config: &TrainConfig,
) -> Result<TrainReport> {
    let examples = load_examples(training_data_path, schema)?;
    let (model, metrics) = train_examples(&examples, config)?;
    save_model(&model, model_save_path)?;

    tracing::info!(
        accuracy = metrics.accuracy,
        precision = metrics.precision,
        recall = metrics.recall,
        f1 = metrics.f1_score,
        "training complete"
    );
    Ok(TrainReport { metrics, samples: examples.len() })
}

pub fn predict(model_path: &Path, text: &str) -> Result<Prediction> {
    let model = load_model(model_path)?;
    Ok(model.predict(text))
}
