//! Train a spam classifier or classify a single text.
//!
//! ```bash
//! spam_classifier train data/training_emails.json models/spam_classifier.bin
//! spam_classifier predict models/spam_classifier.bin "Claim your prize now"
//! ```
//!
//! Results are printed to stdout as a single JSON object; logs go to stderr
//! (set `RUST_LOG=info` for pipeline progress).

use clap::{Parser, Subcommand};
use serde_json::json;
use spam_core::{LabelSchema, TrainConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spam_classifier")]
#[command(about = "TF-IDF + Naive Bayes spam classifier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on a JSON array of {"content", "is_spam"} records and save the model
    Train {
        training_data_path: PathBuf,
        model_save_path: PathBuf,
    },
    /// Classify one text with a saved model
    Predict {
        model_path: PathBuf,
        /// Taken literally, even when it starts with '-'
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

fn main() {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are not failures
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprintln!("{}", e.render());
            fail("Invalid command. Use 'train' or 'predict'.");
        }
    };

    let output = match cli.command {
        Commands::Train { training_data_path, model_save_path } => spam_core::train(
            &training_data_path,
            &model_save_path,
            LabelSchema::TopLevel,
            &TrainConfig::default(),
        )
        .and_then(|report| Ok(serde_json::to_value(report)?)),
        Commands::Predict { model_path, text } => spam_core::predict(&model_path, &text)
            .and_then(|prediction| Ok(serde_json::to_value(prediction)?)),
    };

    match output {
        Ok(value) => println!("{}", value),
        Err(e) => {
            tracing::error!("{}", e);
            fail(&e.to_string());
        }
    }
}

fn fail(message: &str) -> ! {
    println!("{}", json!({ "error": message }));
    std::process::exit(1);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
