//! binclass - Main Entry Point
//!
//! Batch prediction for binary-classification pipelines.

use binclass::cli::{cmd_predict, Cli, Commands};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "binclass=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict {
            schema,
            data,
            encoder,
            model,
            output,
            labels,
        } => {
            cmd_predict(&schema, &data, &encoder, &model, &output, labels)?;
        }
    }

    Ok(())
}
