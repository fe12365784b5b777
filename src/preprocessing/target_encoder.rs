//! Binary target encoding

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::error::{BinclassError, Result};
use crate::export::{load_artifact, save_artifact, ArtifactMetadata};
use crate::schema::BinaryClassificationSchema;

/// Label used for null target values after stringification
const NULL_LABEL: &str = "null";

/// Encodes a two-class target column to integer codes 0 and 1.
///
/// The encoder is configured with the target column name and the two allowed
/// labels in order. The first label maps to 0, the second to 1, and the
/// mapping never changes after construction. `transform` validates the
/// observed labels strictly before producing codes; a dataset without the
/// target column is the normal inference case and yields `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetEncoder {
    target_field: String,
    classes: Vec<String>,
    class_encoding: HashMap<String, i64>,
}

impl TargetEncoder {
    /// Create an encoder for `target_field` with the two allowed labels.
    ///
    /// Allowed values are stringified with `ToString`, so numeric labels like
    /// `0`/`1` and string labels are configured the same way. The list must
    /// contain exactly two distinct values after stringification.
    pub fn new<S: ToString>(target_field: impl Into<String>, allowed_values: &[S]) -> Result<Self> {
        let target_field = target_field.into();
        if target_field.is_empty() {
            return Err(BinclassError::InvalidParameter {
                name: "target_field".to_string(),
                value: String::new(),
                reason: "target field name must not be empty".to_string(),
            });
        }

        let classes: Vec<String> = allowed_values.iter().map(|v| v.to_string()).collect();
        if classes.len() != 2 {
            return Err(BinclassError::InvalidParameter {
                name: "allowed_values".to_string(),
                value: format!("{:?}", classes),
                reason: format!("expected exactly 2 allowed values, got {}", classes.len()),
            });
        }
        if classes[0] == classes[1] {
            return Err(BinclassError::InvalidParameter {
                name: "allowed_values".to_string(),
                value: format!("{:?}", classes),
                reason: "allowed values must be distinct".to_string(),
            });
        }

        let mut class_encoding = HashMap::with_capacity(2);
        class_encoding.insert(classes[0].clone(), 0i64);
        class_encoding.insert(classes[1].clone(), 1i64);

        Ok(Self {
            target_field,
            classes,
            class_encoding,
        })
    }

    /// Build an encoder from a classification schema
    pub fn from_schema(schema: &BinaryClassificationSchema) -> Result<Self> {
        Self::new(&schema.target, &schema.allowed_target_values)
    }

    /// Fit is a no-op: the mapping is fixed at construction. Returns self
    /// for chaining.
    pub fn fit(&mut self, _df: &DataFrame) -> Result<&mut Self> {
        Ok(self)
    }

    /// Fit then transform
    pub fn fit_transform(&mut self, df: &DataFrame) -> Result<Option<Series>> {
        self.fit(df)?.transform(df)
    }

    /// Encode the target column of `df`.
    ///
    /// Returns `Ok(None)` when the target column is absent. Otherwise every
    /// value is stringified, the observed label set is validated (exactly two
    /// distinct labels, matching the configured pair), and the codes come
    /// back as an `Int64` series named after the target field, in input row
    /// order. The input frame is never modified.
    pub fn transform(&self, df: &DataFrame) -> Result<Option<Series>> {
        let column = match df.column(&self.target_field) {
            Ok(column) => column,
            Err(_) => return Ok(None),
        };

        let labels = Self::stringify(column.as_materialized_series())?;

        // BTreeSet keeps diagnostics deterministic
        let observed: BTreeSet<&str> = labels.iter().map(|s| s.as_str()).collect();
        if observed.len() != 2 {
            return Err(BinclassError::WrongClassCount {
                expected: self.classes.clone(),
                observed: observed.iter().map(|s| s.to_string()).collect(),
            });
        }

        let matching = observed
            .iter()
            .filter(|&&v| self.class_encoding.contains_key(v))
            .count();
        if matching != 2 {
            return Err(BinclassError::ClassMismatch {
                expected: self.classes.clone(),
                observed: observed.iter().map(|s| s.to_string()).collect(),
            });
        }

        let codes: Vec<i64> = labels
            .iter()
            .map(|label| self.class_encoding[label])
            .collect();

        Ok(Some(Series::new(self.target_field.as_str().into(), codes)))
    }

    /// The configured labels in order: `[negative, positive]`
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The target column name
    pub fn target_field(&self) -> &str {
        &self.target_field
    }

    /// Persist the encoder to a binary artifact file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let metadata = ArtifactMetadata::new("target_encoder")
            .add_extra("target_field", &self.target_field);
        save_artifact(self, path, metadata)
    }

    /// Load an encoder from a binary artifact file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let (encoder, _metadata) = load_artifact(path)?;
        Ok(encoder)
    }

    /// Stringify every value of the series with one shared coercion.
    /// Nulls become the literal `"null"` label so they participate in
    /// validation like any other value.
    fn stringify(series: &Series) -> Result<Vec<String>> {
        let cast = series.cast(&DataType::String)?;
        let ca = cast.str()?;

        Ok(ca
            .into_iter()
            .map(|opt| match opt {
                Some(s) => s.to_string(),
                None => NULL_LABEL.to_string(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> TargetEncoder {
        TargetEncoder::new("churned", &["no", "yes"]).unwrap()
    }

    #[test]
    fn test_new_builds_fixed_mapping() {
        let enc = encoder();
        assert_eq!(enc.classes(), &["no".to_string(), "yes".to_string()]);
        assert_eq!(enc.target_field(), "churned");
    }

    #[test]
    fn test_new_rejects_one_value() {
        let err = TargetEncoder::new("y", &["only"]).unwrap_err();
        assert!(matches!(err, BinclassError::InvalidParameter { .. }));
    }

    #[test]
    fn test_new_rejects_three_values() {
        let err = TargetEncoder::new("y", &["a", "b", "c"]).unwrap_err();
        assert!(matches!(err, BinclassError::InvalidParameter { .. }));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = TargetEncoder::new("y", &["same", "same"]).unwrap_err();
        assert!(matches!(err, BinclassError::InvalidParameter { .. }));
    }

    #[test]
    fn test_new_rejects_duplicates_after_stringification() {
        let err = TargetEncoder::new("y", &[1, 1]).unwrap_err();
        assert!(matches!(err, BinclassError::InvalidParameter { .. }));
    }

    #[test]
    fn test_new_rejects_empty_target_field() {
        let err = TargetEncoder::new("", &["no", "yes"]).unwrap_err();
        assert!(matches!(err, BinclassError::InvalidParameter { .. }));
    }

    #[test]
    fn test_transform_maps_in_row_order() {
        let df = df!("churned" => &["yes", "no", "yes", "no"]).unwrap();
        let encoded = encoder().transform(&df).unwrap().unwrap();

        assert_eq!(encoded.name().as_str(), "churned");
        let values: Vec<i64> = encoded.i64().unwrap().into_no_null_iter().collect();
        assert_eq!(values, vec![1, 0, 1, 0]);
    }

    #[test]
    fn test_transform_missing_column_is_none() {
        let df = df!("other" => &["a", "b"]).unwrap();
        assert!(encoder().transform(&df).unwrap().is_none());
    }

    #[test]
    fn test_transform_single_class_rejected() {
        let df = df!("churned" => &["no", "no", "no"]).unwrap();
        let err = encoder().transform(&df).unwrap_err();
        match err {
            BinclassError::WrongClassCount { expected, observed } => {
                assert_eq!(expected, vec!["no".to_string(), "yes".to_string()]);
                assert_eq!(observed, vec!["no".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_transform_three_classes_rejected() {
        let df = df!("churned" => &["no", "yes", "maybe"]).unwrap();
        let err = encoder().transform(&df).unwrap_err();
        assert!(matches!(err, BinclassError::WrongClassCount { .. }));
    }

    #[test]
    fn test_transform_empty_column_rejected() {
        let empty: Vec<&str> = Vec::new();
        let df = df!("churned" => &empty).unwrap();
        let err = encoder().transform(&df).unwrap_err();
        match err {
            BinclassError::WrongClassCount { observed, .. } => assert!(observed.is_empty()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_transform_foreign_pair_rejected() {
        let df = df!("churned" => &["true", "false"]).unwrap();
        let err = encoder().transform(&df).unwrap_err();
        match err {
            BinclassError::ClassMismatch { expected, observed } => {
                assert_eq!(expected, vec!["no".to_string(), "yes".to_string()]);
                assert_eq!(observed, vec!["false".to_string(), "true".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_transform_one_known_one_unknown_rejected() {
        let df = df!("churned" => &["no", "unknown"]).unwrap();
        let err = encoder().transform(&df).unwrap_err();
        assert!(matches!(err, BinclassError::ClassMismatch { .. }));
    }

    #[test]
    fn test_numeric_column_shares_string_coercion() {
        let enc = TargetEncoder::new("label", &["0", "1"]).unwrap();
        let df = df!("label" => &[1i64, 0, 0, 1]).unwrap();

        let encoded = enc.transform(&df).unwrap().unwrap();
        let values: Vec<i64> = encoded.i64().unwrap().into_no_null_iter().collect();
        assert_eq!(values, vec![1, 0, 0, 1]);
    }

    #[test]
    fn test_null_labels_surface_in_validation() {
        let df = df!("churned" => &[Some("no"), Some("yes"), None]).unwrap();
        let err = encoder().transform(&df).unwrap_err();
        match err {
            BinclassError::WrongClassCount { observed, .. } => {
                assert!(observed.contains(&"null".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_transform_does_not_mutate_input() {
        let df = df!("churned" => &["yes", "no"]).unwrap();
        let before = df.clone();
        encoder().transform(&df).unwrap();
        assert!(df.equals(&before));
    }

    #[test]
    fn test_fit_is_noop_and_chains() {
        let mut enc = encoder();
        let df = df!("churned" => &["garbage", "labels", "here"]).unwrap();

        // fit inspects nothing, even a malformed frame
        let snapshot = enc.clone();
        enc.fit(&df).unwrap();
        assert_eq!(enc, snapshot);
    }

    #[test]
    fn test_fit_transform_matches_transform() {
        let df = df!("churned" => &["yes", "no"]).unwrap();
        let mut enc = encoder();
        let a = enc.fit_transform(&df).unwrap().unwrap();
        let b = encoder().transform(&df).unwrap().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_schema() {
        let schema = BinaryClassificationSchema::from_json(
            r#"{"id": "id", "target": "y", "allowed_target_values": ["a", "b"], "features": []}"#,
        )
        .unwrap();

        let enc = TargetEncoder::from_schema(&schema).unwrap();
        assert_eq!(enc.target_field(), "y");
        assert_eq!(enc.classes(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("encoder.bin");

        let enc = encoder();
        enc.save(&path).unwrap();
        let restored = TargetEncoder::load(&path).unwrap();

        assert_eq!(enc, restored);

        let df = df!("churned" => &["yes", "no"]).unwrap();
        assert_eq!(
            enc.transform(&df).unwrap(),
            restored.transform(&df).unwrap()
        );
    }
}
