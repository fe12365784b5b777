//! Error types for the binclass pipeline

use thiserror::Error;

/// Result type alias for binclass operations
pub type Result<T> = std::result::Result<T, BinclassError>;

/// Main error type for the binclass pipeline
#[derive(Error, Debug)]
pub enum BinclassError {
    #[error("Data error: {0}")]
    DataError(String),

    #[error("Schema error: {0}")]
    SchemaError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid shape: expected {expected}, got {actual}")]
    ShapeError { expected: String, actual: String },

    #[error("Feature not found: {0}")]
    FeatureNotFound(String),

    #[error("Invalid parameter: {name} = {value}, {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Expected exactly two target classes {expected:?}, found {} distinct value(s): {observed:?}", observed.len())]
    WrongClassCount {
        expected: Vec<String>,
        observed: Vec<String>,
    },

    #[error("Observed target classes {observed:?} do not match allowed values {expected:?}")]
    ClassMismatch {
        expected: Vec<String>,
        observed: Vec<String>,
    },
}

impl From<polars::error::PolarsError> for BinclassError {
    fn from(err: polars::error::PolarsError) -> Self {
        BinclassError::DataError(err.to_string())
    }
}

impl From<serde_json::Error> for BinclassError {
    fn from(err: serde_json::Error) -> Self {
        BinclassError::SerializationError(err.to_string())
    }
}

impl From<ndarray::ShapeError> for BinclassError {
    fn from(err: ndarray::ShapeError) -> Self {
        BinclassError::ShapeError {
            expected: "valid shape".to_string(),
            actual: err.to_string(),
        }
    }
}
