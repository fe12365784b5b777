//! Data preprocessing module
//!
//! Provides the target-side preprocessing for binary classification:
//! validating a two-class target column and mapping its labels to 0/1.

mod target_encoder;

pub use target_encoder::TargetEncoder;
