//! Inference module
//!
//! Provides the inference-only probability model and the batch-prediction
//! orchestration that ties schema, encoder, model, and CSV I/O together.

mod batch;
mod predictor;

pub use batch::{
    add_ids_to_predictions, get_model_predictions, run_batch_predictions,
    DEFAULT_PREDICTION_FIELD,
};
pub use predictor::LinearClassifier;
