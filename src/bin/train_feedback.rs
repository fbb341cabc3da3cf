//! Retrain the classifier from collected user feedback.
//!
//! Expects records shaped `{"content": "...", "user_feedback": {"is_spam": true}}`.
//!
//! ```bash
//! train_feedback train data/feedback.json models/spam_classifier.bin
//! ```

use clap::{Parser, Subcommand};
use spam_core::{LabelSchema, TrainConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: train_feedback train <training_data_path> <model_save_path>";

#[derive(Parser)]
#[command(name = "train_feedback")]
#[command(about = "Train the spam classifier from user feedback", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train and save the model, then print evaluation metrics
    Train {
        training_data_path: PathBuf,
        model_save_path: PathBuf,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprintln!("{}", e.render());
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };
    let Commands::Train { training_data_path, model_save_path } = cli.command;

    match spam_core::train(&training_data_path, &model_save_path, LabelSchema::Feedback, &TrainConfig::feedback()) {
        Ok(report) => {
            let metrics = report.metrics;
            println!("Model trained successfully!");
            println!("Accuracy: {:.4}", metrics.accuracy);
            println!("Precision: {:.4}", metrics.precision);
            println!("Recall: {:.4}", metrics.recall);
            println!("F1 Score: {:.4}", metrics.f1_score);
        }
        Err(e) => {
            println!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
