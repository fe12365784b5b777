//! Batch-prediction orchestration

use polars::prelude::*;
use tracing::{debug, info};

use crate::error::{BinclassError, Result};
use crate::preprocessing::TargetEncoder;
use crate::schema::BinaryClassificationSchema;
use crate::utils::{DataLoader, DataSaver};

use super::predictor::LinearClassifier;

/// Column name for collapsed label predictions
pub const DEFAULT_PREDICTION_FIELD: &str = "predicted_class";

/// Compute model predictions for `df` as a DataFrame.
///
/// With `return_probs` one `f64` column per class is produced, named by the
/// original label strings in configured order. Otherwise a single
/// `prediction_field` column holds the label with the maximal probability
/// per row; on an exact tie the first class in configured order wins (the
/// scan uses a strictly-greater comparison).
pub fn get_model_predictions(
    df: &DataFrame,
    model: &LinearClassifier,
    class_names: &[String],
    prediction_field: &str,
    return_probs: bool,
) -> Result<DataFrame> {
    let proba = model.predict_proba(df)?;

    if class_names.len() != proba.ncols() {
        return Err(BinclassError::ShapeError {
            expected: format!("{} class name(s)", proba.ncols()),
            actual: format!("{} class name(s)", class_names.len()),
        });
    }

    if return_probs {
        let columns: Vec<Column> = class_names
            .iter()
            .enumerate()
            .map(|(j, name)| Column::new(name.as_str().into(), proba.column(j).to_vec()))
            .collect();
        DataFrame::new(columns).map_err(BinclassError::from)
    } else {
        let labels: Vec<&str> = proba
            .rows()
            .into_iter()
            .map(|row| {
                let mut best = 0;
                for j in 1..row.len() {
                    if row[j] > row[best] {
                        best = j;
                    }
                }
                class_names[best].as_str()
            })
            .collect();

        DataFrame::new(vec![Column::new(prediction_field.into(), labels)])
            .map_err(BinclassError::from)
    }
}

/// Prepend the record-id column from `test_df` to the prediction columns.
pub fn add_ids_to_predictions(
    test_df: &DataFrame,
    predictions: &DataFrame,
    id_field: &str,
) -> Result<DataFrame> {
    let id_column = test_df
        .column(id_field)
        .map_err(|_| BinclassError::FeatureNotFound(id_field.to_string()))?;

    if test_df.height() != predictions.height() {
        return Err(BinclassError::ShapeError {
            expected: format!("{} prediction row(s)", test_df.height()),
            actual: format!("{} prediction row(s)", predictions.height()),
        });
    }

    let mut columns = Vec::with_capacity(predictions.width() + 1);
    columns.push(id_column.clone());
    columns.extend(predictions.get_columns().iter().cloned());

    DataFrame::new(columns).map_err(BinclassError::from)
}

/// Run the full batch-prediction pipeline.
///
/// Loads the schema, the test dataset, and the persisted encoder and model;
/// validates the target column through the encoder if the test frame carries
/// one (absence is the normal inference case); computes predictions, attaches
/// record ids, and writes the result to `predictions_path` as CSV.
pub fn run_batch_predictions(
    schema_path: &str,
    test_path: &str,
    encoder_path: &str,
    predictor_path: &str,
    predictions_path: &str,
    return_probs: bool,
) -> Result<()> {
    info!(schema = schema_path, "Loading classification schema");
    let schema = BinaryClassificationSchema::from_file(schema_path)?;

    info!(data = test_path, "Loading test dataset");
    let test_df = DataLoader::new().load_csv(test_path)?;
    debug!(rows = test_df.height(), cols = test_df.width(), "Test dataset loaded");

    info!(encoder = encoder_path, "Loading target encoder");
    let encoder = TargetEncoder::load(encoder_path)?;

    info!(model = predictor_path, "Loading predictor");
    let model = LinearClassifier::load(predictor_path)?;

    // A present target column must carry valid labels; absence is normal
    // at inference time.
    match encoder.transform(&test_df)? {
        Some(_) => debug!(target = encoder.target_field(), "Target column validated"),
        None => debug!(target = encoder.target_field(), "No target column in test data"),
    }

    let predictions = get_model_predictions(
        &test_df,
        &model,
        encoder.classes(),
        DEFAULT_PREDICTION_FIELD,
        return_probs,
    )?;

    let mut output = add_ids_to_predictions(&test_df, &predictions, &schema.id)?;

    info!(
        output = predictions_path,
        rows = output.height(),
        "Writing predictions"
    );
    DataSaver::save_csv(&mut output, predictions_path)?;

    Ok(())
}
