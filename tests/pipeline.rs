use serde_json::{json, Value};
use spam_core::{persistence, LabelSchema, SpamError, TrainConfig};
use std::fs;
use std::path::Path;
use std::process::Command;

const SPAM: &[&str] = &[
    "buy now!!!",
    "buy cheap watches online",
    "buy viagra without prescription",
    "buy gold coins today and save",
    "buy followers instantly",
    "buy discount pills buy buy",
    "winner claim your cash prize",
];

const HAM: &[&str] = &[
    "meeting at 10am",
    "can you review the budget spreadsheet",
    "lunch with the design team on friday",
    "the quarterly report is attached",
    "reminder dentist appointment tuesday",
    "notes from the sprint retrospective",
    "please send the slides before the call",
];

fn top_level_records() -> Value {
    let records: Vec<Value> = SPAM
        .iter()
        .map(|t| json!({"content": t, "is_spam": true}))
        .chain(HAM.iter().map(|t| json!({"content": t, "is_spam": false})))
        .collect();
    Value::Array(records)
}

fn feedback_records() -> Value {
    let records: Vec<Value> = SPAM
        .iter()
        .map(|t| json!({"content": t, "user_feedback": {"is_spam": true}}))
        .chain(HAM.iter().map(|t| json!({"content": t, "user_feedback": {"is_spam": false}})))
        .collect();
    Value::Array(records)
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_vec(value).unwrap()).unwrap();
}

#[test]
fn test_train_then_predict_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("training.json");
    let model = dir.path().join("models").join("spam.bin");
    write_json(&data, &top_level_records());

    let report = spam_core::train(&data, &model, LabelSchema::TopLevel, &TrainConfig::default()).unwrap();
    assert_eq!(report.samples, SPAM.len() + HAM.len());
    assert!(model.exists());

    let prediction = spam_core::predict(&model, "buy now!!!").unwrap();
    assert!(prediction.is_spam);
    assert!(prediction.spam_score > 50.0);
}

#[test]
fn test_training_runs_are_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("training.json");
    write_json(&data, &top_level_records());

    let first = spam_core::train(&data, &dir.path().join("a.bin"), LabelSchema::TopLevel, &TrainConfig::default()).unwrap();
    let second = spam_core::train(&data, &dir.path().join("b.bin"), LabelSchema::TopLevel, &TrainConfig::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_feedback_schema_training() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("feedback.json");
    let model = dir.path().join("spam.bin");
    write_json(&data, &feedback_records());

    let report = spam_core::train(&data, &model, LabelSchema::Feedback, &TrainConfig::feedback()).unwrap();
    for value in [report.metrics.accuracy, report.metrics.precision, report.metrics.recall, report.metrics.f1_score] {
        assert!((0.0..=1.0).contains(&value));
    }

    let loaded = persistence::load_model(&model).unwrap();
    assert_eq!(loaded.classifier().alpha(), 1.0);
}

#[test]
fn test_missing_labels_is_a_data_error() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("training.json");
    let model = dir.path().join("spam.bin");
    write_json(&data, &top_level_records());

    // Top-level labels read through the feedback schema yield none
    let result = spam_core::train(&data, &model, LabelSchema::Feedback, &TrainConfig::feedback());
    assert!(matches!(result, Err(SpamError::InvalidData { labels: 0, .. })));
    assert!(!model.exists());
}

#[test]
fn test_malformed_training_file() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("training.json");
    fs::write(&data, "{not json").unwrap();
    let result = spam_core::train(&data, &dir.path().join("spam.bin"), LabelSchema::TopLevel, &TrainConfig::default());
    assert!(matches!(result, Err(SpamError::Json(_))));
}

#[test]
fn test_predict_empty_text() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("training.json");
    let model = dir.path().join("spam.bin");
    write_json(&data, &top_level_records());
    spam_core::train(&data, &model, LabelSchema::TopLevel, &TrainConfig::default()).unwrap();

    let prediction = spam_core::predict(&model, "").unwrap();
    assert!((0.0..=100.0).contains(&prediction.spam_score));
    assert!((0.0..=1.0).contains(&prediction.confidence));
}

#[test]
fn test_cli_train_and_predict_print_json() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("training.json");
    let model = dir.path().join("spam.bin");
    write_json(&data, &top_level_records());

    let output = Command::new(env!("CARGO_BIN_EXE_spam_classifier"))
        .arg("train")
        .arg(&data)
        .arg(&model)
        .output()
        .unwrap();
    assert!(output.status.success());
    let metrics: Value = serde_json::from_slice(&output.stdout).unwrap();
    for key in ["accuracy", "precision", "recall", "f1_score", "samples"] {
        assert!(metrics.get(key).is_some(), "missing {}", key);
    }

    let output = Command::new(env!("CARGO_BIN_EXE_spam_classifier"))
        .arg("predict")
        .arg(&model)
        .arg("buy now!!!")
        .output()
        .unwrap();
    assert!(output.status.success());
    let prediction: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(prediction["is_spam"], json!(true));
}

#[test]
fn test_cli_predict_accepts_hyphen_leading_text() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("training.json");
    let model = dir.path().join("spam.bin");
    write_json(&data, &top_level_records());
    spam_core::train(&data, &model, LabelSchema::TopLevel, &TrainConfig::default()).unwrap();

    for text in ["-50% off cheap pills", "--buy now"] {
        let output = Command::new(env!("CARGO_BIN_EXE_spam_classifier"))
            .arg("predict")
            .arg(&model)
            .arg(text)
            .output()
            .unwrap();
        assert!(output.status.success(), "predict failed for {:?}", text);
        let prediction: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(prediction.get("error").is_none());
        assert!(prediction["spam_score"].is_number());
    }
}

#[test]
fn test_cli_unknown_command_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_spam_classifier")).arg("serve").output().unwrap();
    assert!(!output.status.success());
    let error: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(error.get("error").is_some());
}

#[test]
fn test_cli_feedback_trainer_prints_metrics() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("feedback.json");
    write_json(&data, &feedback_records());

    let output = Command::new(env!("CARGO_BIN_EXE_train_feedback"))
        .arg("train")
        .arg(&data)
        .arg(dir.path().join("spam.bin"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Model trained successfully!"));
    assert!(stdout.contains("F1 Score: "));
}

#[test]
fn test_cli_feedback_trainer_usage_error() {
    for args in [&[][..], &["predict", "model.bin", "hello"][..], &["train", "only-one-path"][..]] {
        let output = Command::new(env!("CARGO_BIN_EXE_train_feedback")).args(args).output().unwrap();
        assert_eq!(output.status.code(), Some(1), "args {:?}", args);
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.starts_with("Usage: train_feedback train"), "args {:?}", args);
    }
}
