//! Generic artifact serialization
//!
//! Pipeline components are persisted as a checksummed binary container
//! (bincode) or as portable JSON. The on-disk layout is an implementation
//! detail; the only guarantee is that a saved artifact loads back into a
//! behaviorally identical value.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

use crate::error::{BinclassError, Result};

/// Artifact metadata stored alongside the payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Artifact name
    pub name: String,
    /// Artifact version
    pub version: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Additional metadata
    pub extra: HashMap<String, String>,
}

impl Default for ArtifactMetadata {
    fn default() -> Self {
        Self {
            name: "artifact".to_string(),
            version: "1.0.0".to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            extra: HashMap::new(),
        }
    }
}

impl ArtifactMetadata {
    /// Create new metadata with name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Add an extra metadata entry
    pub fn add_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// On-disk artifact container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedArtifact {
    /// Magic bytes for format detection
    pub magic: [u8; 4],
    /// Container format version
    pub format_version: u32,
    /// Artifact metadata
    pub metadata: ArtifactMetadata,
    /// Serialized payload
    pub payload: Vec<u8>,
    /// Checksum for integrity verification
    pub checksum: u64,
}

impl SerializedArtifact {
    /// Magic bytes for binclass artifact files
    const MAGIC: [u8; 4] = [b'B', b'C', b'A', b'F'];
    /// Current container format version
    const VERSION: u32 = 1;

    /// Wrap a serialized payload with metadata and checksum
    pub fn new(metadata: ArtifactMetadata, payload: Vec<u8>) -> Self {
        let checksum = Self::compute_checksum(&payload);
        Self {
            magic: Self::MAGIC,
            format_version: Self::VERSION,
            metadata,
            payload,
            checksum,
        }
    }

    /// Compute checksum using FNV-1a hash
    fn compute_checksum(data: &[u8]) -> u64 {
        const FNV_OFFSET: u64 = 14695981039346656037;
        const FNV_PRIME: u64 = 1099511628211;

        let mut hash = FNV_OFFSET;
        for byte in data {
            hash ^= *byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
    }

    /// Verify payload integrity
    pub fn verify_checksum(&self) -> bool {
        Self::compute_checksum(&self.payload) == self.checksum
    }

    fn validate(&self) -> Result<()> {
        if self.magic != Self::MAGIC {
            return Err(BinclassError::SerializationError(
                "Not a binclass artifact file (bad magic bytes)".to_string(),
            ));
        }
        if self.format_version != Self::VERSION {
            return Err(BinclassError::SerializationError(format!(
                "Unsupported artifact format version: {}",
                self.format_version
            )));
        }
        if !self.verify_checksum() {
            return Err(BinclassError::SerializationError(
                "Checksum verification failed - file may be corrupted".to_string(),
            ));
        }
        Ok(())
    }
}

/// Save a serializable artifact to a binary file
pub fn save_artifact<T: Serialize>(
    artifact: &T,
    path: impl AsRef<Path>,
    metadata: ArtifactMetadata,
) -> Result<()> {
    let payload = bincode::serialize(artifact)
        .map_err(|e| BinclassError::SerializationError(format!("Failed to serialize: {}", e)))?;

    let serialized = SerializedArtifact::new(metadata, payload);

    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    bincode::serialize_into(writer, &serialized)
        .map_err(|e| BinclassError::SerializationError(format!("Failed to write: {}", e)))?;

    Ok(())
}

/// Load an artifact from a binary file
pub fn load_artifact<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<(T, ArtifactMetadata)> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let serialized: SerializedArtifact = bincode::deserialize(&bytes)
        .map_err(|e| BinclassError::SerializationError(format!("Failed to deserialize: {}", e)))?;

    serialized.validate()?;

    let artifact: T = bincode::deserialize(&serialized.payload).map_err(|e| {
        BinclassError::SerializationError(format!("Failed to deserialize payload: {}", e))
    })?;

    Ok((artifact, serialized.metadata))
}

/// Save an artifact to a JSON file (portable, human-readable)
pub fn save_artifact_json<T: Serialize>(
    artifact: &T,
    path: impl AsRef<Path>,
    metadata: ArtifactMetadata,
) -> Result<()> {
    #[derive(Serialize)]
    struct JsonArtifact<'a, T: Serialize> {
        metadata: &'a ArtifactMetadata,
        artifact: &'a T,
    }

    let json_artifact = JsonArtifact {
        metadata: &metadata,
        artifact,
    };

    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, &json_artifact)
        .map_err(|e| BinclassError::SerializationError(format!("Failed to write JSON: {}", e)))?;

    Ok(())
}

/// Load an artifact from a JSON file
pub fn load_artifact_json<T: DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<(T, ArtifactMetadata)> {
    #[derive(Deserialize)]
    struct JsonArtifact<T> {
        metadata: ArtifactMetadata,
        artifact: T,
    }

    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let json_artifact: JsonArtifact<T> = serde_json::from_reader(reader)
        .map_err(|e| BinclassError::SerializationError(format!("Failed to read JSON: {}", e)))?;

    Ok((json_artifact.artifact, json_artifact.metadata))
}
