// src/lib.rs

pub mod core;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod persistence;
pub mod training;

pub use crate::core::model::SpamModel;
pub use crate::core::types::{Example, Prediction};
pub use crate::dataset::LabelSchema;
pub use crate::error::{Result, SpamError};
pub use crate::metrics::Metrics;
pub use crate::training::{predict, train, TrainConfig, TrainReport};
