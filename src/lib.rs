//! binclass - Binary-classification pipeline utilities
//!
//! This crate provides the target-side plumbing of a binary-classification
//! pipeline:
//! - Strict two-class target encoding with a fixed label-to-code mapping
//! - Batch prediction over CSV datasets with per-class probabilities or
//!   collapsed labels
//! - Checksummed artifact persistence for pipeline components
//!
//! # Modules
//!
//! - [`schema`] - Classification problem description loaded from JSON
//! - [`preprocessing`] - Target encoding
//! - [`inference`] - Probability model and batch-prediction orchestration
//! - [`export`] - Artifact serialization
//! - [`utils`] - CSV loading and saving
//! - [`cli`] - Command-line interface

// Core error handling
pub mod error;

// Pipeline components
pub mod inference;
pub mod preprocessing;
pub mod schema;

// Utilities
pub mod export;
pub mod utils;

// Services
pub mod cli;

pub use error::{BinclassError, Result};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{BinclassError, Result};

    // Schema
    pub use crate::schema::BinaryClassificationSchema;

    // Preprocessing
    pub use crate::preprocessing::TargetEncoder;

    // Inference
    pub use crate::inference::{
        add_ids_to_predictions, get_model_predictions, run_batch_predictions, LinearClassifier,
    };

    // Export
    pub use crate::export::{
        load_artifact, load_artifact_json, save_artifact, save_artifact_json, ArtifactMetadata,
    };

    // Data I/O
    pub use crate::utils::{DataLoader, DataSaver};
}
