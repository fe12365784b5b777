//! Classification problem description loaded from a JSON schema file

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{BinclassError, Result};

/// Describes a binary-classification dataset: which column holds the target,
/// which values it may take, which column identifies a record, and which
/// columns feed the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryClassificationSchema {
    /// Human-readable dataset title
    #[serde(default)]
    pub title: Option<String>,
    /// Record identifier column
    pub id: String,
    /// Target column name
    pub target: String,
    /// The two allowed target labels, negative class first
    pub allowed_target_values: Vec<String>,
    /// Feature column names
    pub features: Vec<String>,
}

impl BinaryClassificationSchema {
    /// Load a schema from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())
            .map_err(|e| BinclassError::SchemaError(format!("Failed to open schema file: {}", e)))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| BinclassError::SchemaError(format!("Failed to parse schema: {}", e)))
    }

    /// Parse a schema from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| BinclassError::SchemaError(format!("Failed to parse schema: {}", e)))
    }

    /// The negative class label (index 0 of the allowed values)
    pub fn negative_class(&self) -> Option<&str> {
        self.allowed_target_values.first().map(|s| s.as_str())
    }

    /// The positive class label (index 1 of the allowed values)
    pub fn positive_class(&self) -> Option<&str> {
        self.allowed_target_values.get(1).map(|s| s.as_str())
    }
}
