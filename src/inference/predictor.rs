//! Inference-only probability model

use ndarray::Array2;
use polars::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BinclassError, Result};
use crate::export::{load_artifact, save_artifact, ArtifactMetadata};

/// Logistic classifier over named feature columns.
///
/// Inference only: coefficients arrive from a persisted artifact, there is no
/// training entry point. `predict_proba` returns an `(n_rows, 2)` matrix with
/// the negative-class probability in column 0 and the positive-class
/// probability in column 1; rows sum to 1 by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearClassifier {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearClassifier {
    /// Create a classifier from feature names, coefficients, and intercept
    pub fn new(
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self> {
        if feature_names.len() != coefficients.len() {
            return Err(BinclassError::InvalidParameter {
                name: "coefficients".to_string(),
                value: format!("{} coefficient(s)", coefficients.len()),
                reason: format!(
                    "must match the {} feature name(s)",
                    feature_names.len()
                ),
            });
        }
        Ok(Self {
            feature_names,
            coefficients,
            intercept,
        })
    }

    /// Feature column names, in coefficient order
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Compute class probabilities for every row of `df`.
    pub fn predict_proba(&self, df: &DataFrame) -> Result<Array2<f64>> {
        let features = self.feature_matrix(df)?;
        let n_rows = df.height();

        let probs: Vec<f64> = features
            .par_iter()
            .flat_map_iter(|row| {
                let score: f64 = row
                    .iter()
                    .zip(&self.coefficients)
                    .map(|(x, w)| x * w)
                    .sum::<f64>()
                    + self.intercept;
                let positive = sigmoid(score);
                [1.0 - positive, positive]
            })
            .collect();

        Array2::from_shape_vec((n_rows, 2), probs).map_err(BinclassError::from)
    }

    /// Persist the classifier to a binary artifact file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let metadata = ArtifactMetadata::new("linear_classifier")
            .add_extra("n_features", self.feature_names.len().to_string());
        save_artifact(self, path, metadata)
    }

    /// Load a classifier from a binary artifact file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let (model, _metadata) = load_artifact(path)?;
        Ok(model)
    }

    /// Extract the named feature columns as row vectors of f64.
    fn feature_matrix(&self, df: &DataFrame) -> Result<Vec<Vec<f64>>> {
        let mut columns = Vec::with_capacity(self.feature_names.len());
        for name in &self.feature_names {
            let column = df
                .column(name)
                .map_err(|_| BinclassError::FeatureNotFound(name.clone()))?;
            let cast = column.as_materialized_series().cast(&DataType::Float64)?;
            let ca = cast.f64()?.clone();

            if ca.null_count() > 0 {
                return Err(BinclassError::DataError(format!(
                    "Feature column '{}' contains {} null value(s)",
                    name,
                    ca.null_count()
                )));
            }
            columns.push(ca);
        }

        let n_rows = df.height();
        let mut rows = Vec::with_capacity(n_rows);
        for i in 0..n_rows {
            let mut row = Vec::with_capacity(columns.len());
            for ca in &columns {
                // null_count checked above, get(i) is always Some
                row.push(ca.get(i).unwrap_or(f64::NAN));
            }
            rows.push(row);
        }
        Ok(rows)
    }
}

fn sigmoid(score: f64) -> f64 {
    1.0 / (1.0 + (-score).exp())
}
