//! Artifact persistence for pipeline components
//!
//! Persists any serde-serializable component (target encoder, predictor) to
//! disk in a checksummed binary container or a portable JSON format.

mod serializer;

pub use serializer::{
    load_artifact, load_artifact_json, save_artifact, save_artifact_json, ArtifactMetadata,
    SerializedArtifact,
};
