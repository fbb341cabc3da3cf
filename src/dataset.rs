// File: src/dataset.rs
use crate::core::types::Example;
use crate::error::{Result, SpamError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Where a training record keeps its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSchema {
    /// `{"content": "...", "is_spam": true}`; the canonical layout.
    TopLevel,
    /// `{"content": "...", "user_feedback": {"is_spam": true}}`, as exported by the
    /// feedback collector. Convert with [`Example::from_feedback`] to migrate.
    Feedback,
}

impl LabelSchema {
    pub fn label_of(self, record: &Value) -> Option<bool> {
        match self {
            LabelSchema::TopLevel => record.get("is_spam")?.as_bool(),
            LabelSchema::Feedback => record.get("user_feedback")?.get("is_spam")?.as_bool(),
        }
    }
}

impl Example {
    /// Reads a feedback-shaped record into the canonical form.
    pub fn from_feedback(record: &Value) -> Option<Example> {
        let content = record.get("content")?.as_str()?;
        let is_spam = LabelSchema::Feedback.label_of(record)?;
        Some(Example::new(content, is_spam))
    }
}

pub fn load_examples(path: &Path, schema: LabelSchema) -> Result<Vec<Example>> {
    let reader = BufReader::new(File::open(path)?);
    let records: Vec<Value> = serde_json::from_reader(reader)?;
    let examples = extract_examples(&records, schema)?;
    tracing::info!(path = %path.display(), examples = examples.len(), "loaded training data");
    Ok(examples)
}

/// Pairs texts with labels. Texts and labels are counted independently and must
/// agree; a file with no usable labels is rejected rather than yielding zero examples.
pub fn extract_examples(records: &[Value], schema: LabelSchema) -> Result<Vec<Example>> {
    let texts = records.iter().filter(|r| content_of(r).is_some()).count();
    let labels = records.iter().filter(|r| schema.label_of(r).is_some()).count();

    let examples: Vec<Example> = records
        .iter()
        .filter_map(|record| Some(Example::new(content_of(record)?, schema.label_of(record)?)))
        .collect();

    if texts == 0 || labels == 0 || texts != labels || examples.len() != texts {
        return Err(SpamError::InvalidData { texts, labels });
    }
    Ok(examples)
}

fn content_of(record: &Value) -> Option<&str> {
    record.get("content")?.as_str()
}

/// Shuffles with a seeded RNG, then holds out `ceil(n * test_fraction)` examples.
/// The assignment depends only on the number of examples and the seed.
pub fn train_test_split(examples: &[Example], test_fraction: f64, seed: u64) -> (Vec<Example>, Vec<Example>) {
    let n = examples.len();
    let n_test = ((n as f64) * test_fraction).ceil() as usize;
    let n_test = n_test.min(n);

    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let (test_idx, train_idx) = order.split_at(n_test);
    let pick = |idx: &[usize]| idx.iter().map(|&i| examples[i].clone()).collect::<Vec<_>>();
    (pick(train_idx), pick(test_idx))
}
