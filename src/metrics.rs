// File: src/metrics.rs
use serde::{Deserialize, Serialize};

/// Binary classification scores with spam as the positive class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

impl Metrics {
    /// Scores predictions against true labels. Any ratio with a zero
    /// denominator is reported as 0.0.
    pub fn compute(truth: &[bool], predicted: &[bool]) -> Self {
        let (mut tp, mut fp, mut fn_, mut correct) = (0usize, 0usize, 0usize, 0usize);
        for (&t, &p) in truth.iter().zip(predicted) {
            match (t, p) {
                (true, true) => tp += 1,
                (false, true) => fp += 1,
                (true, false) => fn_ += 1,
                (false, false) => {}
            }
            if t == p {
                correct += 1;
            }
        }

        let total = truth.len().min(predicted.len());
        let accuracy = ratio(correct, total);
        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + fn_);
        let f1_score = ratio(2 * tp, 2 * tp + fp + fn_);

        Self { accuracy, precision, recall, f1_score }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
