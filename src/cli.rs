//! Command-line interface for batch prediction

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::inference::run_batch_predictions;

#[derive(Parser)]
#[command(name = "binclass")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Binary-classification pipeline: target encoding and batch prediction")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run batch predictions over a test dataset
    Predict {
        /// Classification schema JSON file
        #[arg(long)]
        schema: PathBuf,

        /// Test dataset CSV file
        #[arg(short, long)]
        data: PathBuf,

        /// Persisted target encoder artifact
        #[arg(long)]
        encoder: PathBuf,

        /// Persisted predictor artifact
        #[arg(short, long)]
        model: PathBuf,

        /// Output predictions CSV file
        #[arg(short, long)]
        output: PathBuf,

        /// Write collapsed class labels instead of per-class probabilities
        #[arg(long)]
        labels: bool,
    },
}

/// Execute the `predict` subcommand
pub fn cmd_predict(
    schema: &Path,
    data: &Path,
    encoder: &Path,
    model: &Path,
    output: &Path,
    labels: bool,
) -> crate::error::Result<()> {
    run_batch_predictions(
        &schema.to_string_lossy(),
        &data.to_string_lossy(),
        &encoder.to_string_lossy(),
        &model.to_string_lossy(),
        &output.to_string_lossy(),
        !labels,
    )
}
